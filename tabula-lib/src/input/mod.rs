//! Text input view state and form validation.

mod field;
pub mod validation;

pub use field::{
    Adornment, Appearance, FieldMessage, InputField, InputId, InputKind, InputSize, InputVariant,
    Tone,
};
