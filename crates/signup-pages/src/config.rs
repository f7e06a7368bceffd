//! Signup form configuration
//!
//! Everything the controller needs to know about the surrounding markup and
//! the text it shows lives in [`SignupConfig`]. The defaults match the
//! standard signup page markup:
//!
//! ```html
//! <form id="signup-form" action="/subscribe" method="post">
//!   <input id="email-input" name="email" type="email" required>
//!   <div id="email-error" role="alert"></div>
//!   <button class="submit-btn" type="submit">Notify me</button>
//! </form>
//! ```
//!
//! Pages can override any subset of fields with a JSON document:
//!
//! ```
//! use signup_pages::SignupConfig;
//!
//! let config = SignupConfig::from_json(r#"{ "form_id": "waitlist", "grammar": "legacy" }"#).unwrap();
//! assert_eq!(config.form_id, "waitlist");
//! assert_eq!(config.input_id, "email-input");
//! ```

use crate::error::SignupError;
use serde::{Deserialize, Serialize};
use signup_validators::{EmailGrammar, EmailValidator};

/// Default id of the `<form>` element.
pub const DEFAULT_FORM_ID: &str = "signup-form";

/// Default id of the email `<input>`.
pub const DEFAULT_INPUT_ID: &str = "email-input";

/// Default id of the error display element.
pub const DEFAULT_ERROR_ID: &str = "email-error";

/// Default selector of the submit control.
pub const DEFAULT_SUBMIT_SELECTOR: &str = ".submit-btn";

/// Message shown when the email fails the syntax check.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Message shown for every kind of submission failure.
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Content that replaces the form after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessContent {
	/// Class applied to the wrapper element
	pub class: String,
	/// Large glyph shown above the heading
	pub icon: String,
	/// Heading text
	pub heading: String,
	/// Body text
	pub message: String,
}

impl Default for SuccessContent {
	fn default() -> Self {
		Self {
			class: "signup-success".to_string(),
			icon: "✓".to_string(),
			heading: "Thank You!".to_string(),
			message: "You'll be the first to know when we launch.".to_string(),
		}
	}
}

/// Signup controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
	/// Id of the `<form>` element
	pub form_id: String,
	/// Id of the email `<input>` element
	pub input_id: String,
	/// Id of the error display element
	pub error_id: String,
	/// CSS selector of the submit control
	pub submit_selector: String,
	/// Class toggled on the error element while an error is shown
	pub error_visible_class: String,
	/// Class toggled on the submit control while a submission is in flight
	pub loading_class: String,
	/// Message for a malformed email
	pub invalid_email_message: String,
	/// Message for any submission failure
	pub submit_failed_message: String,
	/// Content shown after a successful submission
	pub success: SuccessContent,
	/// Email grammar used for validation
	pub grammar: EmailGrammar,
	/// Whether Enter pressed outside the email field moves focus to it
	pub enter_focuses_input: bool,
}

impl Default for SignupConfig {
	fn default() -> Self {
		Self {
			form_id: DEFAULT_FORM_ID.to_string(),
			input_id: DEFAULT_INPUT_ID.to_string(),
			error_id: DEFAULT_ERROR_ID.to_string(),
			submit_selector: DEFAULT_SUBMIT_SELECTOR.to_string(),
			error_visible_class: "show".to_string(),
			loading_class: "loading".to_string(),
			invalid_email_message: INVALID_EMAIL_MESSAGE.to_string(),
			submit_failed_message: SUBMIT_FAILED_MESSAGE.to_string(),
			success: SuccessContent::default(),
			grammar: EmailGrammar::default(),
			enter_focuses_input: true,
		}
	}
}

impl SignupConfig {
	/// Parses a (possibly partial) JSON document over the defaults.
	///
	/// # Errors
	///
	/// Returns [`SignupError::Config`] if the document is not valid JSON or a
	/// field has the wrong type.
	pub fn from_json(json: &str) -> Result<Self, SignupError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Sets the form, input and error element ids.
	pub fn with_ids(
		mut self,
		form_id: impl Into<String>,
		input_id: impl Into<String>,
		error_id: impl Into<String>,
	) -> Self {
		self.form_id = form_id.into();
		self.input_id = input_id.into();
		self.error_id = error_id.into();
		self
	}

	/// Sets the submit control selector.
	pub fn with_submit_selector(mut self, selector: impl Into<String>) -> Self {
		self.submit_selector = selector.into();
		self
	}

	/// Sets the email grammar.
	pub fn with_grammar(mut self, grammar: EmailGrammar) -> Self {
		self.grammar = grammar;
		self
	}

	/// Sets the success content.
	pub fn with_success(mut self, success: SuccessContent) -> Self {
		self.success = success;
		self
	}

	/// Builds the validator described by this configuration.
	pub fn email_validator(&self) -> EmailValidator {
		EmailValidator::new(self.grammar).with_message(self.invalid_email_message.clone())
	}
}
