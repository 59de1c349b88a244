//! Seam between [`Validator`](super::Validator) and the inputs it checks.

/// An input whose value can be checked and which can display the outcome.
///
/// Errors written here belong to the validator. Implementors keep them apart
/// from any error text the caller sets directly.
pub trait Validatable {
    type Value;

    /// Current value, as the rules see it.
    fn validation_value(&self) -> Self::Value;

    /// Record the message of the first failing rule.
    fn set_error(&mut self, msg: impl Into<String>);

    /// Drop the validator's message after the rules pass.
    fn clear_error(&mut self);

    fn has_error(&self) -> bool;

    fn error(&self) -> Option<&str>;

    /// Stable id reported in [`InvalidField::input_id`](super::InvalidField::input_id).
    fn input_id(&self) -> String;
}
