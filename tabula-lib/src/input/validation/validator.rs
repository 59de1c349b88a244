//! Validator builder for fluent validation API.

use std::mem;

use log::debug;

use super::result::{InvalidField, ValidationResult};
use super::rules::Rules;
use super::validatable::Validatable;
use crate::error::RuleError;

type RunField<'a> = Box<dyn FnOnce() -> Option<String> + 'a>;

/// A field queued for validation.
struct FieldEntry<'a> {
    name: String,
    input_id: String,
    run: RunField<'a>,
}

/// Builder for validating multiple form fields.
///
/// Fields are borrowed mutably until [`Validator::validate`] writes the
/// outcome into each of them.
pub struct Validator<'a> {
    fields: Vec<FieldEntry<'a>>,
}

impl<'a> Validator<'a> {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field<W>(self, input: &'a mut W, name: impl Into<String>) -> FieldBuilder<'a, W>
    where
        W: Validatable + 'a,
        W::Value: 'a,
    {
        FieldBuilder {
            validator: self,
            input,
            name: name.into(),
            rules: Rules::new(),
        }
    }

    /// Add a field with a prepared rule set.
    pub fn field_with<W>(
        self,
        input: &'a mut W,
        name: impl Into<String>,
        rules: Rules<W::Value>,
    ) -> Self
    where
        W: Validatable + 'a,
        W::Value: 'a,
    {
        FieldBuilder {
            validator: self,
            input,
            name: name.into(),
            rules,
        }
        .finalize()
    }

    /// Run every field's rules.
    ///
    /// Each field gets the message of its first failing rule, or has its
    /// error cleared when all rules pass.
    pub fn validate(self) -> ValidationResult {
        let mut errors = Vec::new();

        for field in self.fields {
            if let Some(message) = (field.run)() {
                debug!("Field '{}' failed validation: {}", field.name, message);
                errors.push(InvalidField {
                    field: field.name,
                    input_id: field.input_id,
                    message,
                });
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

impl Default for Validator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<'a, W: Validatable> {
    validator: Validator<'a>,
    input: &'a mut W,
    name: String,
    rules: Rules<W::Value>,
}

impl<'a, W> FieldBuilder<'a, W>
where
    W: Validatable + 'a,
    W::Value: 'a,
{
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&W::Value) -> bool + Send + Sync + 'static,
    {
        self.rules = mem::take(&mut self.rules).rule(f, msg);
        self
    }

    /// Continue to the next field.
    pub fn field<W2>(self, input: &'a mut W2, name: impl Into<String>) -> FieldBuilder<'a, W2>
    where
        W2: Validatable + 'a,
        W2::Value: 'a,
    {
        self.finalize().field(input, name)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    pub fn finalize(self) -> Validator<'a> {
        let input_id = self.input.input_id();
        let input = self.input;
        let rules = self.rules;

        let run: RunField<'a> = Box::new(move || {
            let value = input.validation_value();
            match rules.first_failure(&value) {
                Some(message) => {
                    let message = message.to_string();
                    input.set_error(message.clone());
                    Some(message)
                }
                None => {
                    input.clear_error();
                    None
                }
            }
        });

        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name: self.name,
            input_id,
            run,
        });
        validator
    }
}

// Built-in rules for String values
impl<'a, W> FieldBuilder<'a, W>
where
    W: Validatable<Value = String> + 'a,
{
    /// Require the field to be non-empty.
    pub fn required(mut self, msg: impl Into<String>) -> Self {
        self.rules = mem::take(&mut self.rules).required(msg);
        self
    }

    /// Require minimum length (in characters).
    pub fn min_length(mut self, min: usize, msg: impl Into<String>) -> Self {
        self.rules = mem::take(&mut self.rules).min_length(min, msg);
        self
    }

    /// Require maximum length (in characters).
    pub fn max_length(mut self, max: usize, msg: impl Into<String>) -> Self {
        self.rules = mem::take(&mut self.rules).max_length(max, msg);
        self
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(mut self, pattern: &str, msg: impl Into<String>) -> Result<Self, RuleError> {
        self.rules = mem::take(&mut self.rules).pattern(pattern, msg)?;
        Ok(self)
    }

    /// Require a valid email address.
    pub fn email(mut self, msg: impl Into<String>) -> Self {
        self.rules = mem::take(&mut self.rules).email(msg);
        self
    }

    /// Require the value to equal another value.
    pub fn equals(mut self, other: impl Into<String>, msg: impl Into<String>) -> Self {
        self.rules = mem::take(&mut self.rules).equals(other, msg);
        self
    }

    /// Require the value to contain a substring.
    pub fn contains(mut self, substr: impl Into<String>, msg: impl Into<String>) -> Self {
        self.rules = mem::take(&mut self.rules).contains(substr, msg);
        self
    }
}
