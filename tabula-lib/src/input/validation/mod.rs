//! Form validation.
//!
//! Rules are attached per field with a fluent builder. Running the validator
//! writes the first failing rule's message into each field and collects the
//! failures.
//!
//! # Example
//!
//! ```
//! use tabula_lib::input::InputField;
//! use tabula_lib::input::validation::{Validatable, Validator};
//!
//! let mut username = InputField::new().with_value("ab");
//! let mut email = InputField::new().with_value("john@example.com");
//!
//! let result = Validator::new()
//!     .field(&mut username, "username")
//!     .required("Username is required")
//!     .min_length(3, "Username must be at least 3 characters")
//!     .field(&mut email, "email")
//!     .required("Email is required")
//!     .email("Please enter a valid email")
//!     .validate();
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.errors().len(), 1);
//! assert_eq!(username.error(), Some("Username must be at least 3 characters"));
//! assert!(!email.has_error());
//! ```

mod result;
mod rules;
mod validatable;
mod validator;

pub use result::{InvalidField, ValidationResult};
pub use rules::Rules;
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
