use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::trace;
use serde::{Deserialize, Serialize};

use super::validation::Validatable;

/// Unique identifier for an input field instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

/// Visual style of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    /// Horizontal padding in cells.
    pub fn padding(self) -> usize {
        match self {
            InputSize::Sm => 0,
            InputSize::Md => 1,
            InputSize::Lg => 2,
        }
    }
}

/// Kind of text the field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
}

/// Controls shown at the trailing edge of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adornment {
    Spinner,
    ClearButton,
    PasswordToggle { revealed: bool },
}

/// Message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMessage<'a> {
    Error(&'a str),
    Helper(&'a str),
}

impl<'a> FieldMessage<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            FieldMessage::Error(text) | FieldMessage::Helper(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FieldMessage::Error(_))
    }
}

/// Base tone of the field, by precedence: disabled, invalid, variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Disabled,
    Invalid,
    Variant(InputVariant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub tone: Tone,
    pub focused: bool,
}

type ChangeHandler = Box<dyn FnMut(&str) + Send>;

/// View state of a text input.
///
/// The field owns its value and interaction state. A change handler, when
/// set, is told about every accepted value change.
///
/// # Example
///
/// ```
/// use tabula_lib::input::{Adornment, InputField, InputKind};
///
/// let mut password = InputField::new()
///     .label("Password")
///     .kind(InputKind::Password)
///     .clearable(true);
///
/// password.set_value("hunter2");
/// assert_eq!(password.effective_kind(), InputKind::Password);
///
/// password.toggle_password();
/// assert_eq!(password.effective_kind(), InputKind::Text);
/// assert_eq!(
///     password.adornments(),
///     vec![Adornment::ClearButton, Adornment::PasswordToggle { revealed: true }]
/// );
/// ```
pub struct InputField {
    id: InputId,
    value: String,
    label: Option<String>,
    placeholder: Option<String>,
    helper: Option<String>,
    error_message: Option<String>,
    validation_error: Option<String>,
    disabled: bool,
    invalid: bool,
    required: bool,
    loading: bool,
    clearable: bool,
    variant: InputVariant,
    size: InputSize,
    kind: InputKind,
    focused: bool,
    password_revealed: bool,
    on_change: Option<ChangeHandler>,
}

impl InputField {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            id: InputId::new(),
            value: String::new(),
            label: None,
            placeholder: None,
            helper: None,
            error_message: None,
            validation_error: None,
            disabled: false,
            invalid: false,
            required: false,
            loading: false,
            clearable: false,
            variant: InputVariant::default(),
            size: InputSize::default(),
            kind: InputKind::default(),
            focused: false,
            password_revealed: false,
            on_change: None,
        }
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    /// Initial value. Does not notify the change handler.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    /// Error message shown while the field is marked invalid.
    ///
    /// Owned by the caller; value changes leave it in place.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Called with the new value after every accepted change.
    pub fn on_change(mut self, handler: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn id(&self) -> InputId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn helper_text(&self) -> Option<&str> {
        self.helper.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Marked invalid by the caller, or failing validation.
    pub fn is_invalid(&self) -> bool {
        self.invalid || self.validation_error.is_some()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_password_revealed(&self) -> bool {
        self.password_revealed
    }

    pub fn variant_kind(&self) -> InputVariant {
        self.variant
    }

    pub fn size_kind(&self) -> InputSize {
        self.size
    }

    pub fn input_kind(&self) -> InputKind {
        self.kind
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace the value.
    ///
    /// Ignored while disabled or loading. An accepted change clears any
    /// validation error and notifies the change handler. Returns `true` if
    /// the change was accepted.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.value = value.into();
        self.clear_error();
        trace!("Input {} changed", self.id);
        if let Some(handler) = self.on_change.as_mut() {
            handler(&self.value);
        }
        true
    }

    /// Clear the value (the clear button).
    pub fn clear(&mut self) -> bool {
        self.set_value(String::new())
    }

    /// Show or hide a password. Returns whether the password is now shown.
    pub fn toggle_password(&mut self) -> bool {
        if self.kind == InputKind::Password {
            self.password_revealed = !self.password_revealed;
        }
        self.password_revealed
    }

    /// Focus the field. A disabled or loading field cannot take focus.
    pub fn focus(&mut self) -> bool {
        self.focused = self.is_interactive();
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Record a validation failure.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.validation_error = Some(message.into());
    }

    /// Clear the validation failure. The caller's `invalid` flag and error
    /// message are untouched.
    pub fn clear_error(&mut self) {
        self.validation_error = None;
    }

    /// Error text currently shown, if any.
    pub fn error(&self) -> Option<&str> {
        match self.message() {
            Some(FieldMessage::Error(text)) => Some(text),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    /// Whether the field accepts input.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Kind to render with; a revealed password shows as plain text.
    pub fn effective_kind(&self) -> InputKind {
        match self.kind {
            InputKind::Password if self.password_revealed => InputKind::Text,
            kind => kind,
        }
    }

    /// Trailing controls, in display order.
    pub fn adornments(&self) -> Vec<Adornment> {
        let mut adornments = Vec::new();
        if self.loading {
            adornments.push(Adornment::Spinner);
            return adornments;
        }
        if self.clearable && !self.value.is_empty() {
            adornments.push(Adornment::ClearButton);
        }
        if self.kind == InputKind::Password {
            adornments.push(Adornment::PasswordToggle {
                revealed: self.password_revealed,
            });
        }
        adornments
    }

    /// Message under the field.
    ///
    /// A validation failure wins, then the caller's error message while the
    /// field is marked invalid, then the helper text.
    pub fn message(&self) -> Option<FieldMessage<'_>> {
        if let Some(error) = self.validation_error.as_deref() {
            return Some(FieldMessage::Error(error));
        }
        if self.invalid
            && let Some(error) = self.error_message.as_deref()
        {
            return Some(FieldMessage::Error(error));
        }
        self.helper.as_deref().map(FieldMessage::Helper)
    }

    /// Id of the element describing the field, if a message is shown.
    pub fn described_by(&self) -> Option<String> {
        self.message().map(|message| match message {
            FieldMessage::Error(_) => format!("{}-error", self.id),
            FieldMessage::Helper(_) => format!("{}-helper", self.id),
        })
    }

    pub fn appearance(&self) -> Appearance {
        let tone = if self.disabled {
            Tone::Disabled
        } else if self.is_invalid() {
            Tone::Invalid
        } else {
            Tone::Variant(self.variant)
        };
        Appearance {
            tone,
            focused: self.focused,
        }
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.kind {
            InputKind::Password => "***",
            _ => self.value.as_str(),
        };
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("value", &value)
            .field("label", &self.label)
            .field("invalid", &self.is_invalid())
            .field("disabled", &self.disabled)
            .field("loading", &self.loading)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl Validatable for InputField {
    type Value = String;

    fn validation_value(&self) -> String {
        self.value.clone()
    }

    fn set_error(&mut self, msg: impl Into<String>) {
        InputField::set_error(self, msg);
    }

    fn clear_error(&mut self) {
        InputField::clear_error(self);
    }

    fn has_error(&self) -> bool {
        self.validation_error.is_some()
    }

    fn error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    fn input_id(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = InputField::new();
        let b = InputField::new();
        assert_ne!(a.id(), b.id());
        assert!(a.id().to_string().starts_with("__input_"));
    }

    #[test]
    fn test_set_value_notifies() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut field = InputField::new().on_change(move |v| sink.lock().unwrap().push(v.to_string()));

        assert!(field.set_value("abc"));
        assert!(field.clear());
        assert_eq!(*seen.lock().unwrap(), vec!["abc".to_string(), String::new()]);
    }

    #[test]
    fn test_disabled_and_loading_ignore_input() {
        let mut disabled = InputField::new().with_value("x").disabled(true);
        assert!(!disabled.set_value("y"));
        assert!(!disabled.focus());
        assert_eq!(disabled.value(), "x");

        let mut loading = InputField::new().loading(true);
        assert!(!loading.set_value("y"));
        assert!(loading.is_empty());
    }

    #[test]
    fn test_set_value_clears_error() {
        let mut field = InputField::new();
        field.set_error("bad");
        assert!(field.is_invalid());
        field.set_value("better");
        assert!(!field.is_invalid());
        assert_eq!(field.message(), None);
    }

    #[test]
    fn test_caller_error_message_survives_typing() {
        let mut email = InputField::new()
            .error_message("Please enter a valid email address")
            .invalid(true);
        assert!(email.set_value("john.example.com"));
        assert!(email.is_invalid());
        assert_eq!(
            email.message(),
            Some(FieldMessage::Error("Please enter a valid email address"))
        );
    }

    #[test]
    fn test_validation_error_overrides_caller_message() {
        let mut field = InputField::new().error_message("caller").invalid(true);
        field.set_error("rule failed");
        assert_eq!(field.error(), Some("rule failed"));
        assert_eq!(Validatable::error(&field), Some("rule failed"));

        field.set_value("x");
        assert_eq!(field.error(), Some("caller"));
        assert!(!Validatable::has_error(&field));
    }

    #[test]
    fn test_adornments() {
        let loading = InputField::new()
            .with_value("x")
            .clearable(true)
            .kind(InputKind::Password)
            .loading(true);
        assert_eq!(loading.adornments(), vec![Adornment::Spinner]);

        let empty = InputField::new().clearable(true);
        assert!(empty.adornments().is_empty());

        let filled = InputField::new().clearable(true).with_value("x");
        assert_eq!(filled.adornments(), vec![Adornment::ClearButton]);
    }

    #[test]
    fn test_toggle_password_only_for_passwords() {
        let mut text = InputField::new();
        assert!(!text.toggle_password());
        assert_eq!(text.effective_kind(), InputKind::Text);

        let mut password = InputField::new().kind(InputKind::Password);
        assert!(password.toggle_password());
        assert!(!password.toggle_password());
        assert_eq!(password.effective_kind(), InputKind::Password);
    }

    #[test]
    fn test_message_precedence() {
        let helper = InputField::new().helper("We'll never share it");
        assert_eq!(helper.message(), Some(FieldMessage::Helper("We'll never share it")));
        assert_eq!(helper.described_by(), Some(format!("{}-helper", helper.id())));

        // Error message without the invalid flag stays hidden
        let quiet = InputField::new().helper("help").error_message("bad");
        assert_eq!(quiet.message(), Some(FieldMessage::Helper("help")));

        let invalid = InputField::new().helper("help").error_message("bad").invalid(true);
        assert_eq!(invalid.message(), Some(FieldMessage::Error("bad")));
        assert_eq!(invalid.described_by(), Some(format!("{}-error", invalid.id())));

        // Invalid without a message falls back to the helper
        let bare = InputField::new().helper("help").invalid(true);
        assert_eq!(bare.message(), Some(FieldMessage::Helper("help")));

        assert_eq!(InputField::new().described_by(), None);
    }

    #[test]
    fn test_appearance_precedence() {
        let field = InputField::new().variant(InputVariant::Ghost);
        assert_eq!(field.appearance().tone, Tone::Variant(InputVariant::Ghost));

        let invalid = InputField::new().variant(InputVariant::Filled).invalid(true);
        assert_eq!(invalid.appearance().tone, Tone::Invalid);

        let disabled = InputField::new().invalid(true).disabled(true);
        assert_eq!(disabled.appearance().tone, Tone::Disabled);
    }

    #[test]
    fn test_focus_and_blur() {
        let mut field = InputField::new();
        assert!(field.focus());
        assert!(field.appearance().focused);
        field.blur();
        assert!(!field.is_focused());
    }

    #[test]
    fn test_debug_hides_password() {
        let field = InputField::new().kind(InputKind::Password).with_value("secret");
        assert!(!format!("{:?}", field).contains("secret"));
    }
}
