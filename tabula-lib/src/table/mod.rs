//! Data table view state.
//!
//! The table is a pure view-state engine over caller-owned rows:
//!
//! - [`sort`] orders rows by one column at a time
//! - [`selection`] tracks selected rows by [`RowKey`]
//! - [`pagination`] windows the ordered rows with a caller-owned descriptor
//! - [`DataTable`] ties these together for one render cycle
//!
//! Rendering is left to the host; [`DataTable::view`] returns everything a
//! renderer needs.

pub mod column;
pub mod identity;
pub mod options;
pub mod pagination;
pub mod selection;
pub mod sort;
mod view;

pub use column::{
    Accessor, Alignment, CellRenderer, Column, ColumnWidth, DeriveFn, FixedSide, find_column,
};
pub use identity::{KeyFn, RowIdentity, RowKey};
pub use options::{DEFAULT_EMPTY_TEXT, TableOptions};
pub use pagination::PageDescriptor;
pub use selection::{AllSelectedState, Selection, SelectionMode};
pub use sort::{SortDirection, SortDirective};
pub use view::*;
