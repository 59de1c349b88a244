//! Rule sets for a single field.

use std::fmt;

use email_address::EmailAddress;
use regex::Regex;

use crate::error::RuleError;

type Check<V> = Box<dyn Fn(&V) -> bool + Send + Sync>;

struct Rule<V> {
    check: Check<V>,
    message: String,
}

/// Ordered validation rules for one value type.
///
/// Rules are evaluated in the order they were added.
pub struct Rules<V> {
    rules: Vec<Rule<V>>,
}

impl<V> Rules<V> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule. `check` returns `true` when the value is valid.
    pub fn rule<F>(mut self, check: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            check: Box::new(check),
            message: msg.into(),
        });
        self
    }

    /// Message of the first rule that fails.
    pub fn first_failure(&self, value: &V) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| !(rule.check)(value))
            .map(|rule| rule.message.as_str())
    }

    /// Messages of every failing rule, in order.
    pub fn failures(&self, value: &V) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|rule| !(rule.check)(value))
            .map(|rule| rule.message.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<V> Default for Rules<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Rules<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| &rule.message))
            .finish()
    }
}

// Built-in rules for String values
impl Rules<String> {
    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v: &String| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v: &String| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v: &String| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Result<Self, RuleError> {
        let re = Regex::new(pattern).map_err(|e| RuleError::invalid_pattern(pattern, &e))?;
        Ok(self.rule(move |v: &String| re.is_match(v), msg))
    }

    /// Require a valid email address. Empty is valid; use `required` for
    /// non-empty.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v: &String| v.is_empty() || EmailAddress::is_valid(v),
            msg,
        )
    }

    /// Require the value to equal another value.
    pub fn equals(self, other: impl Into<String>, msg: impl Into<String>) -> Self {
        let other = other.into();
        self.rule(move |v: &String| *v == other, msg)
    }

    /// Require the value to contain a substring.
    pub fn contains(self, substr: impl Into<String>, msg: impl Into<String>) -> Self {
        let substr = substr.into();
        self.rule(move |v: &String| v.contains(&substr), msg)
    }
}
