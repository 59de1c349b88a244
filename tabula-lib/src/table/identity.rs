//! Row identity.
//!
//! Selection and row keys refer to records by a derived key rather than by
//! position, so they stay valid when the rows are re-sorted or re-paged.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::Record;

/// Stable identity of a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowKey(String);

impl RowKey {
    /// Create a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for RowKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Derivation function for row keys.
pub type KeyFn = Arc<dyn Fn(&Record) -> RowKey + Send + Sync>;

/// How a row's identity is derived.
#[derive(Clone, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum RowIdentity {
    /// Position of the row in the input sequence.
    ///
    /// Only stable while the caller keeps the input order. Supply a field or
    /// a derivation function whenever selection must survive reordering.
    #[default]
    Index,
    /// Read a named field and convert it to a string. A missing or null field
    /// gives the empty key.
    Field(String),
    /// Caller-supplied derivation.
    Derived(KeyFn),
}

impl RowIdentity {
    /// Identify rows by a named field.
    pub fn field(name: impl Into<String>) -> Self {
        RowIdentity::Field(name.into())
    }

    /// Identify rows with a derivation function.
    pub fn derived<F>(derive: F) -> Self
    where
        F: Fn(&Record) -> RowKey + Send + Sync + 'static,
    {
        RowIdentity::Derived(Arc::new(derive))
    }

    /// Whether identity falls back to input position.
    pub fn is_positional(&self) -> bool {
        matches!(self, RowIdentity::Index)
    }

    /// Resolve the key of a record found at `index` in the input sequence.
    pub fn resolve(&self, record: &Record, index: usize) -> RowKey {
        match self {
            RowIdentity::Index => RowKey(index.to_string()),
            RowIdentity::Field(field) => {
                RowKey(record.get(field).map(|v| v.to_string()).unwrap_or_default())
            }
            RowIdentity::Derived(derive) => derive(record),
        }
    }
}

impl From<Option<String>> for RowIdentity {
    fn from(field: Option<String>) -> Self {
        match field {
            Some(field) => RowIdentity::Field(field),
            None => RowIdentity::Index,
        }
    }
}

impl fmt::Debug for RowIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowIdentity::Index => f.write_str("Index"),
            RowIdentity::Field(field) => f.debug_tuple("Field").field(field).finish(),
            RowIdentity::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    #[test]
    fn test_field_identity_coerces_to_string() {
        let identity = RowIdentity::field("id");
        let record = Record::new().set("id", 3);
        assert_eq!(identity.resolve(&record, 7), RowKey::from("3"));
    }

    #[test]
    fn test_missing_field_is_empty_key() {
        let identity = RowIdentity::field("id");
        assert_eq!(identity.resolve(&Record::new(), 0), RowKey::from(""));
        let null_id = Record::new().set("id", Value::Null);
        assert_eq!(identity.resolve(&null_id, 0), RowKey::from(""));
    }

    #[test]
    fn test_index_identity() {
        let identity = RowIdentity::default();
        assert!(identity.is_positional());
        assert_eq!(identity.resolve(&Record::new(), 4), RowKey::from("4"));
    }

    #[test]
    fn test_derived_identity() {
        let identity = RowIdentity::derived(|r| {
            RowKey::new(format!(
                "{}:{}",
                r.get("team").map(|v| v.to_string()).unwrap_or_default(),
                r.get("name").map(|v| v.to_string()).unwrap_or_default()
            ))
        });
        let record = Record::new().set("team", "Alpha").set("name", "Eve");
        assert_eq!(identity.resolve(&record, 0).as_str(), "Alpha:Eve");
    }

    #[test]
    fn test_deserialize_from_optional_field() {
        let identity: RowIdentity = serde_json::from_str(r#""id""#).unwrap();
        assert!(matches!(identity, RowIdentity::Field(ref f) if f == "id"));
        let identity: RowIdentity = serde_json::from_str("null").unwrap();
        assert!(identity.is_positional());
    }
}
