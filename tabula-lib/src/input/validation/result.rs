/// An input that failed one of its rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidField {
    /// Name the field was registered under with [`Validator::field`](super::Validator::field).
    pub field: String,
    /// [`Validatable::input_id`](super::Validatable::input_id) of the failing input.
    pub input_id: String,
    /// Message of the first rule that failed.
    pub message: String,
}

/// Outcome of a [`Validator`](super::Validator) run, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(Vec<InvalidField>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Failing fields; empty when the form is valid.
    pub fn errors(&self) -> &[InvalidField] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&InvalidField> {
        self.errors().first()
    }

    /// Input id of the first failing field, the one a form would focus.
    pub fn first_invalid_input(&self) -> Option<&str> {
        self.first_error().map(|e| e.input_id.as_str())
    }

    /// Message recorded for `field`, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}
