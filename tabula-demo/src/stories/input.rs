use tabula_lib::input::validation::Validator;
use tabula_lib::input::{InputField, InputKind, InputSize, InputVariant};

use crate::catalog::{Story, StoryContext};
use crate::error::DemoError;
use crate::render;

inventory::submit! {
    Story::new("input/basic", "Name, email and password fields", basic)
}

inventory::submit! {
    Story::new("input/variants", "Styles, states and sizes", variants)
}

inventory::submit! {
    Story::new("input/validation", "Sign-up form after submitting", validation)
}

fn snapshot(fields: &[InputField]) -> String {
    fields
        .iter()
        .map(render::input)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn basic(_: &StoryContext) -> Result<String, DemoError> {
    let mut name = InputField::new()
        .label("Full Name")
        .placeholder("Enter your full name")
        .helper("This will be displayed publicly")
        .clearable(true)
        .required(true);
    name.set_value("John Doe");

    let mut email = InputField::new()
        .label("Email Address")
        .kind(InputKind::Email)
        .placeholder("you@example.com")
        .error_message("Please enter a valid email address")
        .required(true);
    email.set_value("john.example.com");
    let invalid = !email.is_empty() && !email.value().contains('@');
    email = email.invalid(invalid);

    let mut password = InputField::new()
        .label("Password")
        .kind(InputKind::Password)
        .placeholder("Enter your password")
        .helper("Must be at least 8 characters")
        .required(true);
    password.set_value("hunter22");
    password.focus();

    Ok(snapshot(&[name, email, password]))
}

fn variants(_: &StoryContext) -> Result<String, DemoError> {
    let fields = [
        InputField::new()
            .label("Outlined (Default)")
            .placeholder("Default outlined style"),
        InputField::new()
            .label("Filled Style")
            .placeholder("Filled background style")
            .variant(InputVariant::Filled),
        InputField::new()
            .label("Ghost Style")
            .placeholder("Minimal ghost style")
            .variant(InputVariant::Ghost),
        InputField::new()
            .label("Loading State")
            .placeholder("Processing...")
            .loading(true),
        InputField::new()
            .label("Disabled Field")
            .placeholder("This field is disabled")
            .disabled(true),
        InputField::new()
            .label("Small")
            .placeholder("Small input")
            .size(InputSize::Sm),
        InputField::new()
            .label("Medium")
            .placeholder("Medium input (default)"),
        InputField::new()
            .label("Large")
            .placeholder("Large input")
            .size(InputSize::Lg),
    ];
    Ok(snapshot(&fields))
}

fn validation(_: &StoryContext) -> Result<String, DemoError> {
    let mut username = InputField::new().label("Username").required(true);
    let mut email = InputField::new()
        .label("Email")
        .kind(InputKind::Email)
        .required(true);
    let mut password = InputField::new()
        .label("Password")
        .kind(InputKind::Password)
        .helper("Must be at least 8 characters");
    let mut zip = InputField::new().label("ZIP Code");

    username.set_value("jd");
    email.set_value("john@");
    password.set_value("password1");
    zip.set_value("1234");

    let result = Validator::new()
        .field(&mut username, "username")
        .required("Username is required")
        .min_length(3, "Username must be at least 3 characters")
        .field(&mut email, "email")
        .required("Email is required")
        .email("Please enter a valid email")
        .field(&mut password, "password")
        .min_length(8, "Password must be at least 8 characters")
        .field(&mut zip, "zip")
        .pattern(r"^\d{5}$", "ZIP must be five digits")?
        .validate();

    let summary = match result.errors().len() {
        0 => "All fields valid".to_string(),
        n => format!("{} field(s) need attention", n),
    };

    Ok(format!(
        "{}\n\n{}",
        snapshot(&[username, email, password, zip]),
        summary
    ))
}
