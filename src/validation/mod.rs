//! Input validation for prediction requests
//! Collects every out-of-range field instead of stopping at the first

pub mod types;
pub mod validator;

pub use types::{InputField, ValidationError, ValidationErrorSet, ViolationKind};
pub use validator::{validate, FieldRule, InputValidator};
