//! Errors from the typed [`Record`](crate::model::Record) getters.

/// A typed getter could not produce a value of the requested kind.
///
/// Null fields are not errors; getters return `Ok(None)` for them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("record has no field '{field}'")]
    Missing { field: String },

    /// `expected` and `actual` are [`Value::type_name`](crate::model::Value::type_name) strings.
    #[error("field '{field}' holds {actual}, not {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing { field: field.into() }
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Record key the getter was asked for.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::TypeMismatch { field, .. } => field,
        }
    }
}
