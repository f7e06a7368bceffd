//! Mount-time errors

use thiserror::Error;

/// Errors raised while binding the controller to a page.
///
/// Runtime failures never surface here: validation problems are shown
/// inline and submission problems become [`crate::SubmitError`].
#[derive(Debug, Error)]
pub enum SignupError {
	/// No global `window` or `document` is available.
	#[error("No browser document is available")]
	NoDocument,

	/// A required element is missing from the page.
	#[error("Element not found: {0}")]
	ElementNotFound(String),

	/// An element exists but has the wrong type.
	#[error("Element '{selector}' is not a {expected}")]
	ElementType {
		/// Id or selector used for the lookup
		selector: String,
		/// Expected element interface
		expected: &'static str,
	},

	/// The configuration document could not be parsed.
	#[error("Invalid configuration: {0}")]
	Config(#[from] serde_json::Error),

	/// A DOM call threw.
	#[error("JavaScript error: {0}")]
	Js(String),
}
