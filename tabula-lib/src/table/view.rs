//! Table view-state engine.
//!
//! [`DataTable`] borrows the caller's rows and columns for one render cycle
//! and applies transitions to a [`TableViewState`] that the caller owns.
//! Rows flow through the sort stage, then the page window, to give the
//! visible rows; selection is stored by row key next to them.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::column::Column;
use super::identity::RowKey;
use super::options::TableOptions;
use super::pagination::PageDescriptor;
use super::selection::{AllSelectedState, Selection, SelectionMode};
use super::sort::{self, SortDirection, SortDirective};
use crate::model::Record;

/// View state of a table: the active sort and the selected rows.
///
/// Owned by the host between render cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableViewState {
    /// Active sort directive, if any.
    pub sort: Option<SortDirective>,
    /// Selected row keys.
    pub selection: Selection,
}

impl TableViewState {
    pub fn new() -> Self {
        Self::default()
    }
}

type SelectHandler<'a> = Box<dyn FnMut(&[RowKey]) + 'a>;
type SortHandler<'a> = Box<dyn FnMut(&str, SortDirection) + 'a>;
type PageHandler<'a> = Box<dyn FnMut(usize, usize) + 'a>;
type RowHandler<'a> = Box<dyn FnMut(&RowKey, &Record) + 'a>;

#[derive(Default)]
struct Handlers<'a> {
    on_row_select: Option<SelectHandler<'a>>,
    on_sort: Option<SortHandler<'a>>,
    on_page_change: Option<PageHandler<'a>>,
    on_row_click: Option<RowHandler<'a>>,
    on_row_double_click: Option<RowHandler<'a>>,
}

// =============================================================================
// Derived view
// =============================================================================

/// A row of the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow<'a> {
    /// Position of the record in the input rows.
    pub index: usize,
    /// Row identity.
    pub key: RowKey,
    /// The record itself.
    pub record: &'a Record,
    /// Whether the row is selected.
    pub selected: bool,
}

/// A header cell with its sort indicator.
#[derive(Debug, Clone)]
pub struct HeaderCell<'a> {
    pub column: &'a Column,
    /// Direction when this column carries the active sort.
    pub sort: Option<SortDirection>,
}

impl HeaderCell<'_> {
    /// Indicator glyph for the active sort on this column.
    pub fn indicator(&self) -> Option<&'static str> {
        self.sort.map(SortDirection::indicator)
    }
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody<'a> {
    /// Loading placeholder.
    Loading,
    /// No rows at all; carries the empty-state text.
    Empty(String),
    /// The visible rows. May be empty when the page is past the end.
    Rows(Vec<VisibleRow<'a>>),
}

/// Enablement hints for pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHints {
    pub current: usize,
    pub page_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl From<&PageDescriptor> for PageHints {
    fn from(page: &PageDescriptor) -> Self {
        Self {
            current: page.current,
            page_count: page.page_count(),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    pub headers: Vec<HeaderCell<'a>>,
    pub body: TableBody<'a>,
    pub selection_mode: SelectionMode,
    /// Select-all state against the visible rows.
    pub all_selected: AllSelectedState,
    pub page: Option<PageHints>,
}

impl<'a> TableView<'a> {
    pub fn is_all_selected(&self) -> bool {
        self.all_selected.is_all()
    }

    pub fn is_indeterminate(&self) -> bool {
        self.all_selected.is_indeterminate()
    }

    /// Visible rows, empty unless the body shows rows.
    pub fn rows(&self) -> &[VisibleRow<'a>] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            _ => &[],
        }
    }
}

// =============================================================================
// DataTable
// =============================================================================

/// The table view-state engine.
///
/// # Example
///
/// ```
/// use tabula_lib::model::Record;
/// use tabula_lib::table::{
///     Column, DataTable, RowIdentity, RowKey, SelectionMode, TableOptions, TableViewState,
/// };
///
/// let rows: Vec<Record> = [("1", 25), ("2", 30), ("3", 28)]
///     .into_iter()
///     .map(|(id, age)| Record::new().set("id", id).set("age", age))
///     .collect();
/// let columns = vec![Column::new("age", "Age").sortable()];
///
/// let mut state = TableViewState::new();
/// let mut table = DataTable::new(&rows, &columns).with_options(
///     TableOptions::new()
///         .selection(SelectionMode::Multiple)
///         .row_key(RowIdentity::field("id")),
/// );
///
/// table.toggle_sort(&mut state, "age");
/// table.toggle_row(&mut state, &"3".into(), true);
///
/// let keys: Vec<RowKey> = table.visible_keys(&state);
/// assert_eq!(keys, vec![RowKey::from("1"), RowKey::from("3"), RowKey::from("2")]);
/// assert!(table.view(&state).is_indeterminate());
/// ```
pub struct DataTable<'a> {
    rows: &'a [Record],
    columns: &'a [Column],
    options: TableOptions,
    page: Option<PageDescriptor>,
    handlers: Handlers<'a>,
}

impl<'a> DataTable<'a> {
    /// Create a table over borrowed rows and columns with default options.
    pub fn new(rows: &'a [Record], columns: &'a [Column]) -> Self {
        Self {
            rows,
            columns,
            options: TableOptions::default(),
            page: None,
            handlers: Handlers::default(),
        }
    }

    /// Set the table options.
    pub fn with_options(mut self, options: TableOptions) -> Self {
        if options.selection.is_enabled() && options.row_key.is_positional() {
            warn!(
                "Table selection is enabled without a row key; selection follows input \
                 position and will not survive reordering of the rows"
            );
        }
        self.options = options;
        self
    }

    /// Paginate with a caller-owned page descriptor.
    pub fn with_page(mut self, page: PageDescriptor) -> Self {
        self.page = Some(page);
        self
    }

    /// Called with the full selection after every accepted selection change.
    pub fn on_row_select(mut self, handler: impl FnMut(&[RowKey]) + 'a) -> Self {
        self.handlers.on_row_select = Some(Box::new(handler));
        self
    }

    /// Delegate sorting to the caller.
    ///
    /// With a sort handler registered the rows are never sorted locally: the
    /// caller receives the new directive and is expected to hand back rows
    /// already in that order.
    pub fn on_sort(mut self, handler: impl FnMut(&str, SortDirection) + 'a) -> Self {
        self.handlers.on_sort = Some(Box::new(handler));
        self
    }

    /// Called with `(page, page_size)` when a page change is requested.
    pub fn on_page_change(mut self, handler: impl FnMut(usize, usize) + 'a) -> Self {
        self.handlers.on_page_change = Some(Box::new(handler));
        self
    }

    pub fn on_row_click(mut self, handler: impl FnMut(&RowKey, &Record) + 'a) -> Self {
        self.handlers.on_row_click = Some(Box::new(handler));
        self
    }

    pub fn on_row_double_click(mut self, handler: impl FnMut(&RowKey, &Record) + 'a) -> Self {
        self.handlers.on_row_double_click = Some(Box::new(handler));
        self
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    pub fn rows(&self) -> &'a [Record] {
        self.rows
    }

    pub fn columns(&self) -> &'a [Column] {
        self.columns
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn page(&self) -> Option<&PageDescriptor> {
        self.page.as_ref()
    }

    /// Whether sorting is delegated to the caller.
    pub fn is_externally_sorted(&self) -> bool {
        self.handlers.on_sort.is_some()
    }

    /// Key of the input row at `index`.
    pub fn key_at(&self, index: usize) -> Option<RowKey> {
        self.rows
            .get(index)
            .map(|record| self.options.row_key.resolve(record, index))
    }

    /// Find an input row by key.
    pub fn find_row(&self, key: &RowKey) -> Option<(usize, &'a Record)> {
        let rows = self.rows;
        rows.iter()
            .enumerate()
            .find(|(i, record)| &self.options.row_key.resolve(record, *i) == key)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Header click on `column_key`.
    ///
    /// Returns the new direction, or `None` if the column is not sortable.
    /// In external-sort mode the sort handler is notified.
    pub fn toggle_sort(
        &mut self,
        state: &mut TableViewState,
        column_key: &str,
    ) -> Option<SortDirection> {
        let next = sort::toggle_directive(state.sort.as_ref(), self.columns, column_key)?;
        let direction = next.direction;

        if let Some(handler) = self.handlers.on_sort.as_mut() {
            debug!("Delegating sort: column={} direction={:?}", next.column, direction);
            handler(&next.column, direction);
        }

        state.sort = Some(next);
        Some(direction)
    }

    /// Drop the active sort; rows return to input order.
    pub fn clear_sort(&mut self, state: &mut TableViewState) {
        state.sort = None;
    }

    /// Active direction on a column, for header indicators.
    pub fn sort_indicator(&self, state: &TableViewState, column_key: &str) -> Option<SortDirection> {
        state
            .sort
            .as_ref()
            .filter(|directive| directive.column == column_key)
            .map(|directive| directive.direction)
    }

    /// Input indices in display order.
    pub fn ordered_indices(&self, state: &TableViewState) -> Vec<usize> {
        if self.is_externally_sorted() {
            return (0..self.rows.len()).collect();
        }
        sort::sorted_indices(self.rows, state.sort.as_ref(), self.columns)
    }

    /// Records in display order, all pages.
    pub fn ordered_rows(&self, state: &TableViewState) -> Vec<&'a Record> {
        let rows = self.rows;
        self.ordered_indices(state)
            .into_iter()
            .map(|i| &rows[i])
            .collect()
    }

    // -------------------------------------------------------------------------
    // Paging
    // -------------------------------------------------------------------------

    /// Input indices of the visible rows, in display order.
    pub fn visible_indices(&self, state: &TableViewState) -> Vec<usize> {
        let ordered = self.ordered_indices(state);
        match &self.page {
            Some(page) => {
                let range = page.range(ordered.len());
                ordered[range].to_vec()
            }
            None => ordered,
        }
    }

    /// Keys of the visible rows, in display order.
    pub fn visible_keys(&self, state: &TableViewState) -> Vec<RowKey> {
        self.visible_indices(state)
            .into_iter()
            .map(|i| self.options.row_key.resolve(&self.rows[i], i))
            .collect()
    }

    /// The visible rows with their keys and selection flags.
    pub fn visible_rows(&self, state: &TableViewState) -> Vec<VisibleRow<'a>> {
        let rows = self.rows;
        self.visible_indices(state)
            .into_iter()
            .map(|index| {
                let record = &rows[index];
                let key = self.options.row_key.resolve(record, index);
                let selected = state.selection.is_selected(&key);
                VisibleRow {
                    index,
                    key,
                    record,
                    selected,
                }
            })
            .collect()
    }

    /// Request a page. The caller decides whether to apply it.
    ///
    /// Returns `true` if a page handler was notified.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let Some(descriptor) = self.page else {
            return false;
        };
        self.request_page(page, descriptor.page_size)
    }

    /// Request the next page when one exists.
    pub fn next_page(&mut self) -> bool {
        match self.page.as_ref().and_then(PageDescriptor::next) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// Request the previous page when one exists.
    pub fn previous_page(&mut self) -> bool {
        match self.page.as_ref().and_then(PageDescriptor::previous) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// Request a new page size, restarting at the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if self.page.is_none() {
            return false;
        }
        self.request_page(1, page_size)
    }

    fn request_page(&mut self, page: usize, page_size: usize) -> bool {
        debug!("Page requested: page={} page_size={}", page, page_size);
        match self.handlers.on_page_change.as_mut() {
            Some(handler) => {
                handler(page, page_size);
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selection_mode(&self) -> SelectionMode {
        self.options.selection
    }

    /// Check or uncheck one row.
    ///
    /// Returns `true` if the selection mode accepted the change; accepted
    /// changes notify the selection handler with the full selection.
    pub fn toggle_row(&mut self, state: &mut TableViewState, key: &RowKey, checked: bool) -> bool {
        let accepted = state
            .selection
            .toggle(self.options.selection, key.clone(), checked);
        if accepted {
            debug!("Row {} {}", key, if checked { "selected" } else { "deselected" });
            self.notify_selection(&state.selection);
        }
        accepted
    }

    /// Check or uncheck every visible row (multiple mode only).
    pub fn select_all(&mut self, state: &mut TableViewState, checked: bool) -> bool {
        let visible = self.visible_keys(state);
        let accepted = state
            .selection
            .select_all(self.options.selection, checked, visible);
        if accepted {
            debug!("Select all: checked={} selected={}", checked, state.selection.len());
            self.notify_selection(&state.selection);
        }
        accepted
    }

    /// Deselect everything, regardless of visibility.
    pub fn clear_selection(&mut self, state: &mut TableViewState) -> bool {
        if !self.options.selection.is_enabled() {
            return false;
        }
        state.selection.clear();
        self.notify_selection(&state.selection);
        true
    }

    pub fn is_selected(&self, state: &TableViewState, key: &RowKey) -> bool {
        state.selection.is_selected(key)
    }

    /// Select-all state against the visible rows.
    pub fn all_selected_state(&self, state: &TableViewState) -> AllSelectedState {
        let visible = self.visible_keys(state);
        state.selection.all_selected_state(&visible)
    }

    /// Selected records in input order.
    pub fn selected_rows(&self, state: &TableViewState) -> Vec<&'a Record> {
        let rows = self.rows;
        rows.iter()
            .enumerate()
            .filter(|(i, record)| {
                state
                    .selection
                    .is_selected(&self.options.row_key.resolve(record, *i))
            })
            .map(|(_, record)| record)
            .collect()
    }

    fn notify_selection(&mut self, selection: &Selection) {
        if let Some(handler) = self.handlers.on_row_select.as_mut() {
            handler(&selection.selected());
        }
    }

    // -------------------------------------------------------------------------
    // Row events
    // -------------------------------------------------------------------------

    /// Forward a row click to the click handler.
    pub fn click_row(&mut self, key: &RowKey) -> bool {
        let Some((_, record)) = self.find_row(key) else {
            return false;
        };
        match self.handlers.on_row_click.as_mut() {
            Some(handler) => {
                handler(key, record);
                true
            }
            None => false,
        }
    }

    /// Forward a row double-click to the double-click handler.
    pub fn double_click_row(&mut self, key: &RowKey) -> bool {
        let Some((_, record)) = self.find_row(key) else {
            return false;
        };
        match self.handlers.on_row_double_click.as_mut() {
            Some(handler) => {
                handler(key, record);
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// Derive the full view for one frame.
    pub fn view(&self, state: &TableViewState) -> TableView<'a> {
        let columns = self.columns;
        let headers = columns
            .iter()
            .map(|column| HeaderCell {
                column,
                sort: self.sort_indicator(state, &column.key),
            })
            .collect();

        let body = if self.options.loading {
            TableBody::Loading
        } else if self.rows.is_empty() {
            TableBody::Empty(self.options.empty_text.clone())
        } else {
            TableBody::Rows(self.visible_rows(state))
        };

        let all_selected = match &body {
            TableBody::Rows(rows) => state.selection.all_selected_state(rows.iter().map(|r| &r.key)),
            _ => AllSelectedState::None,
        };

        trace!(
            "Table view: rows={} sort={:?} selected={}",
            self.rows.len(),
            state.sort,
            state.selection.len()
        );

        TableView {
            headers,
            body,
            selection_mode: self.options.selection,
            all_selected,
            page: self.page.as_ref().map(PageHints::from),
        }
    }
}
