//! # signup-web
//!
//! Email signup form for the browser, written in Rust and compiled to
//! WebAssembly.
//!
//! The crate binds to an existing signup form, validates the email address
//! as the user types, shows inline errors, and posts the form to its `action`
//! URL with a loading state and success/failure transitions.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - Form controller, DOM binding and HTTP transport
//! - `debug-transitions` - Log every submission state transition
//! - `console_error_panic_hook` - Readable panics in the browser console
//!
//! Without `pages` only the target-independent [`validators`] are built.
//!
//! ## Quick Example
//!
//! ```rust
//! use signup::prelude::*;
//!
//! let validator = EmailValidator::new(EmailGrammar::Standard);
//! assert!(validator.validate("user@example.com").is_ok());
//! ```
//!
//! In the browser:
//!
//! ```rust,ignore
//! use signup::pages::dom::mount_on_ready;
//! use signup::prelude::*;
//!
//! mount_on_ready(SignupConfig::default())?;
//! ```

#![warn(missing_docs)]

#[cfg(feature = "pages")]
pub mod pages;
pub mod validators;

/// Commonly used types
pub mod prelude {
	pub use crate::validators::{EmailGrammar, EmailValidator, ValidationError, Validator};

	#[cfg(feature = "pages")]
	pub use crate::pages::{
		HttpTransport, MemoryView, SignupConfig, SignupError, SignupFormController, SignupView,
		SubmissionState, SubmitError, SubmitOutcome, SubmitTransport, ValidationState,
	};
}
