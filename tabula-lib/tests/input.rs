//! Integration tests for input fields and form validation.

use tabula_lib::error::RuleError;
use tabula_lib::input::validation::{Rules, Validatable, ValidationResult, Validator};
use tabula_lib::input::{FieldMessage, InputField, InputKind, Tone};

fn sign_up_form() -> (InputField, InputField, InputField) {
    let username = InputField::new().label("Username").required(true);
    let email = InputField::new()
        .label("Email")
        .kind(InputKind::Email)
        .helper("We'll never share your email");
    let password = InputField::new().label("Password").kind(InputKind::Password);
    (username, email, password)
}

// =============================================================================
// Validator
// =============================================================================

#[test]
fn test_valid_form() {
    let (mut username, mut email, mut password) = sign_up_form();
    username.set_value("johndoe");
    email.set_value("john@example.com");
    password.set_value("correct horse");

    let result = Validator::new()
        .field(&mut username, "username")
        .required("Username is required")
        .min_length(3, "Username must be at least 3 characters")
        .field(&mut email, "email")
        .required("Email is required")
        .email("Please enter a valid email")
        .field(&mut password, "password")
        .min_length(8, "Password must be at least 8 characters")
        .validate();

    assert_eq!(result, ValidationResult::Valid);
    assert!(result.first_invalid_input().is_none());
}

#[test]
fn test_first_failure_is_written_to_each_field() {
    let (mut username, mut email, mut password) = sign_up_form();
    email.set_value("not-an-email");
    password.set_value("short");

    let result = Validator::new()
        .field(&mut username, "username")
        .required("Username is required")
        .min_length(3, "Username must be at least 3 characters")
        .field(&mut email, "email")
        .required("Email is required")
        .email("Please enter a valid email")
        .field(&mut password, "password")
        .min_length(8, "Password must be at least 8 characters")
        .validate();

    assert!(result.is_invalid());
    assert_eq!(result.errors().len(), 3);
    assert_eq!(result.error_for("username"), Some("Username is required"));
    assert_eq!(result.error_for("email"), Some("Please enter a valid email"));
    assert_eq!(result.first_invalid_input(), Some(username.input_id().as_str()));

    assert_eq!(username.message(), Some(FieldMessage::Error("Username is required")));
    assert_eq!(email.described_by(), Some(format!("{}-error", email.id())));
    assert_eq!(password.appearance().tone, Tone::Invalid);
}

#[test]
fn test_revalidation_clears_fixed_fields() {
    let mut email = InputField::new().helper("Work address");

    let result = Validator::new()
        .field(&mut email, "email")
        .required("Email is required")
        .validate();
    assert!(result.is_invalid());
    assert!(email.has_error());

    email.set_value("jane@example.com");
    email.set_error("stale");
    let result = Validator::new()
        .field(&mut email, "email")
        .required("Email is required")
        .validate();
    assert!(result.is_valid());
    assert!(!email.has_error());
    assert_eq!(email.message(), Some(FieldMessage::Helper("Work address")));
}

#[test]
fn test_pattern_rule_and_bad_pattern() -> Result<(), RuleError> {
    let mut zip = InputField::new().with_value("12a45");

    let result = Validator::new()
        .field(&mut zip, "zip")
        .pattern(r"^\d{5}$", "ZIP must be five digits")?
        .validate();
    assert_eq!(result.error_for("zip"), Some("ZIP must be five digits"));

    let err = Validator::new()
        .field(&mut zip, "zip")
        .pattern("[", "never used")
        .err();
    assert!(matches!(err, Some(RuleError::InvalidPattern { .. })));
    Ok(())
}

#[test]
fn test_confirm_password_with_equals_and_custom_rule() {
    let mut password = InputField::new().with_value("s3cret-pass");
    let mut confirm = InputField::new().with_value("s3cret-pas");
    let expected = password.value().to_string();

    let result = Validator::new()
        .field(&mut password, "password")
        .rule(|v| v.chars().any(|c| c.is_ascii_digit()), "Needs a digit")
        .field(&mut confirm, "confirm")
        .equals(expected, "Passwords do not match")
        .validate();

    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.first_error().unwrap().field, "confirm");
    assert_eq!(confirm.error(), Some("Passwords do not match"));
}

#[test]
fn test_prepared_rule_set() {
    let rules = Rules::<String>::new()
        .required("Required")
        .contains("@", "Needs an @");
    let mut field = InputField::new().with_value("nope");

    let result = Validator::new().field_with(&mut field, "handle", rules).validate();
    assert_eq!(result.error_for("handle"), Some("Needs an @"));
}

// =============================================================================
// Field interaction
// =============================================================================

#[test]
fn test_typing_after_error_clears_it() {
    let mut field = InputField::new().required(true);
    Validator::new()
        .field(&mut field, "name")
        .required("Name is required")
        .validate();
    assert!(field.is_invalid());

    field.set_value("J");
    assert!(!field.is_invalid());
    assert_eq!(field.message(), None);
}

#[test]
fn test_loading_field_shows_spinner_and_rejects_focus() {
    let mut field = InputField::new().with_value("query").clearable(true).loading(true);
    assert!(!field.focus());
    assert!(!field.clear());
    assert_eq!(field.value(), "query");
    assert!(!field.is_interactive());
}
