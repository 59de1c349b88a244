//! Validation rule errors

/// Error raised while building a validation rule set.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuleError {
    /// A `pattern` rule was given a regex that does not compile.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl RuleError {
    /// Creates an invalid pattern error from a regex compile failure.
    pub fn invalid_pattern(pattern: impl Into<String>, err: &regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: err.to_string(),
        }
    }
}
