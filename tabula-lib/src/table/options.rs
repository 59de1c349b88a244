//! Table configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::identity::RowIdentity;
use super::selection::SelectionMode;
use crate::error::ConfigError;

/// Text shown when the table has no rows.
pub const DEFAULT_EMPTY_TEXT: &str = "No data available";

/// Per-table configuration.
///
/// Built in code with the builder methods, or loaded from JSON:
///
/// ```
/// use tabula_lib::table::{SelectionMode, TableOptions};
///
/// let options = TableOptions::from_json_str(
///     r#"{ "selection": "multiple", "row_key": "id", "page_size": 10 }"#,
/// )
/// .unwrap();
/// assert_eq!(options.selection, SelectionMode::Multiple);
/// assert_eq!(options.page_size, Some(10));
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Selection mode.
    pub selection: SelectionMode,
    /// How row identity is derived. In JSON, the name of the identity field.
    pub row_key: RowIdentity,
    /// Preferred page size for hosts that paginate.
    pub page_size: Option<usize>,
    /// Empty-state text.
    pub empty_text: String,
    /// Show the loading state instead of rows.
    pub loading: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            selection: SelectionMode::Disabled,
            row_key: RowIdentity::Index,
            page_size: None,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            loading: false,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Set the selection mode.
    pub fn selection(mut self, mode: SelectionMode) -> Self {
        self.selection = mode;
        self
    }

    /// Set how rows are identified.
    pub fn row_key(mut self, identity: RowIdentity) -> Self {
        self.row_key = identity;
        self
    }

    /// Set the preferred page size.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the empty-state text.
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Show the loading state.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}
