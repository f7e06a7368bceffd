//! Email validators for signup forms
//!
//! This crate holds the syntactic checks the signup form controller runs on
//! every keystroke. It is target-independent and compiles unchanged for
//! `wasm32-unknown-unknown`.
//!
//! ## Example
//!
//! ```
//! use signup_validators::{EmailGrammar, EmailValidator, Validator};
//!
//! let validator = EmailValidator::new(EmailGrammar::Standard);
//! assert!(validator.validate("user@example.com").is_ok());
//! assert!(validator.validate("user@@example").is_err());
//! ```
//!
//! ## Security Note
//!
//! Client-side validation is a UX aid only. The receiving endpoint must
//! validate again.

pub mod email;
pub mod errors;

pub use email::{EmailGrammar, EmailValidator};
pub use errors::{ValidationError, ValidationResult};

/// Trait for validators
pub trait Validator<T: ?Sized> {
	/// Validates `value`, returning the reason it was rejected on failure.
	fn validate(&self, value: &T) -> ValidationResult<()>;
}
