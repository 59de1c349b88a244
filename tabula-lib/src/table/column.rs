//! Column descriptors.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::model::{Record, Value};

/// Derivation function for computed column values.
pub type DeriveFn = Arc<dyn Fn(&Record) -> Value + Send + Sync>;

/// Custom cell renderer. Receives the accessor value and the whole record.
pub type CellRenderer = Arc<dyn Fn(&Value, &Record) -> String + Send + Sync>;

/// Column width specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in characters.
    Fixed(u16),
    /// Flexible width with weight.
    Flex(u16),
    /// Auto-size to content.
    Auto,
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Side a column is pinned to while the rest of the table scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedSide {
    Left,
    Right,
}

/// How a column reads its value out of a record.
#[derive(Clone)]
pub enum Accessor {
    /// Read a named field. Missing fields read as `Value::Null`.
    Field(String),
    /// Compute the value from the whole record.
    Derived(DeriveFn),
}

impl Accessor {
    /// Read this column's value from a record.
    pub fn read<'r>(&self, record: &'r Record) -> Cow<'r, Value> {
        match self {
            Accessor::Field(field) => record
                .get(field)
                .map(Cow::Borrowed)
                .unwrap_or(Cow::Owned(Value::Null)),
            Accessor::Derived(derive) => Cow::Owned(derive(record)),
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(field) => f.debug_tuple("Field").field(field).finish(),
            Accessor::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// A table column definition.
///
/// The key identifies the column (sort directives refer to it) and must be
/// unique within a column set. Title, width, alignment, fixed side and the
/// cell renderer are carried for the renderer and never interpreted here.
///
/// # Examples
///
/// ```
/// use tabula_lib::table::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("id", "ID").sortable(),
///     Column::new("name", "Name").sortable(),
///     Column::new("age", "Age").sortable().align(Alignment::Right),
///     Column::new("role", "Role"),
/// ];
/// assert!(!columns[3].sortable);
/// ```
#[derive(Clone)]
pub struct Column {
    /// Unique identifier for this column.
    pub key: String,
    /// Header text displayed at the top.
    pub title: String,
    /// Where the cell value comes from.
    pub accessor: Accessor,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Width specification.
    pub width: ColumnWidth,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Pinned side, if any.
    pub fixed: Option<FixedSide>,
    /// Custom cell renderer.
    pub render: Option<CellRenderer>,
}

impl Column {
    /// Create a column reading the field named like its key.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            accessor: Accessor::Field(key.clone()),
            key,
            title: title.into(),
            sortable: false,
            width: ColumnWidth::default(),
            align: Alignment::Left,
            fixed: None,
            render: None,
        }
    }

    /// Read a different record field than the column key.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.accessor = Accessor::Field(field.into());
        self
    }

    /// Compute the column value from the record.
    pub fn derived<F>(mut self, derive: F) -> Self
    where
        F: Fn(&Record) -> Value + Send + Sync + 'static,
    {
        self.accessor = Accessor::Derived(Arc::new(derive));
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the width specification.
    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Pin the column to one side.
    pub fn fixed(mut self, side: FixedSide) -> Self {
        self.fixed = Some(side);
        self
    }

    /// Use a custom renderer for the cell text.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value, &Record) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Read this column's value from a record.
    pub fn value<'r>(&self, record: &'r Record) -> Cow<'r, Value> {
        self.accessor.read(record)
    }

    /// Cell text for a record, through the custom renderer when one is set.
    pub fn cell_text(&self, record: &Record) -> String {
        let value = self.value(record);
        match &self.render {
            Some(render) => render(&value, record),
            None => value.to_string(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("accessor", &self.accessor)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("fixed", &self.fixed)
            .field("render", &self.render.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Find a column by key.
pub fn find_column<'c>(columns: &'c [Column], key: &str) -> Option<&'c Column> {
    columns.iter().find(|col| col.key == key)
}
