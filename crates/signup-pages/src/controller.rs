//! Signup form controller
//!
//! One [`SignupFormController`] is constructed per form. It owns the
//! validation and submission state and drives a [`SignupView`] in response to
//! the page's events:
//!
//! | Event | Entry point |
//! |-------|-------------|
//! | `input`, `blur` on the email field | [`SignupFormController::on_input`], [`SignupFormController::on_blur`] |
//! | `focus` on the email field | [`SignupFormController::on_focus`] |
//! | `submit` on the form | [`SignupFormController::handle_submit`] |
//! | `keydown` on the document | [`SignupFormController::on_keydown`] |
//!
//! ## Invariants
//!
//! - While [`SubmissionState::Submitting`], the input and submit control are
//!   disabled and further submits are ignored.
//! - The error region shows text exactly when the field is
//!   [`ValidationState::Invalid`] or the submission is
//!   [`SubmissionState::Failed`].
//!
//! ## Example
//!
//! ```
//! use signup_pages::{HttpTransport, MemoryView, SignupConfig, SignupFormController};
//!
//! let view = MemoryView::new("https://example.com/subscribe").with_email("user@@example");
//! let controller = SignupFormController::new(view, HttpTransport::new(), SignupConfig::default());
//!
//! assert!(!controller.validate_email());
//! assert_eq!(controller.view().error_text(), "Please enter a valid email address");
//! ```

use crate::config::SignupConfig;
use crate::state::{SubmissionEvent, SubmissionState, TransitionError, ValidationState};
use crate::transport::{SubmitError, SubmitRequest, SubmitTransport};
use crate::view::SignupView;
use crate::{debug_log, error_log, info_log, warn_log};
use signup_validators::{EmailValidator, Validator};
use std::cell::Cell;

/// Result of [`SignupFormController::handle_submit`]
#[derive(Debug)]
pub enum SubmitOutcome {
	/// The email failed validation; no request was made.
	Invalid,
	/// A submission was already in flight or had succeeded; no request was made.
	Ignored,
	/// The server accepted the signup.
	Succeeded,
	/// The request failed. The user sees a generic message.
	Failed(SubmitError),
}

impl SubmitOutcome {
	/// Whether a request was sent.
	pub fn issued_request(&self) -> bool {
		matches!(self, Self::Succeeded | Self::Failed(_))
	}
}

/// Controller for a single signup form
pub struct SignupFormController<V, T> {
	view: V,
	transport: T,
	config: SignupConfig,
	validator: EmailValidator,
	validation: Cell<ValidationState>,
	submission: Cell<SubmissionState>,
}

impl<V, T> SignupFormController<V, T>
where
	V: SignupView,
	T: SubmitTransport,
{
	/// Creates a controller bound to `view`, posting through `transport`.
	pub fn new(view: V, transport: T, config: SignupConfig) -> Self {
		let validator = config.email_validator();
		Self {
			view,
			transport,
			config,
			validator,
			validation: Cell::new(ValidationState::Untouched),
			submission: Cell::new(SubmissionState::Idle),
		}
	}

	/// The bound view.
	pub fn view(&self) -> &V {
		&self.view
	}

	/// The submission transport.
	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// The controller's configuration.
	pub fn config(&self) -> &SignupConfig {
		&self.config
	}

	/// Current validation state.
	pub fn validation_state(&self) -> ValidationState {
		self.validation.get()
	}

	/// Current submission state.
	pub fn submission_state(&self) -> SubmissionState {
		self.submission.get()
	}

	/// Validates the trimmed email value and updates the error display.
	///
	/// An empty value is accepted, clears any error and leaves the field
	/// [`ValidationState::Untouched`]; whether the field is required is left
	/// to the markup.
	pub fn validate_email(&self) -> bool {
		let email = self.view.email_value();
		let email = trim_input(&email);

		if email.is_empty() {
			self.clear_error();
			self.validation.set(ValidationState::Untouched);
			return true;
		}

		match self.validator.validate(email) {
			Ok(()) => {
				self.clear_error();
				self.validation.set(ValidationState::Valid);
				true
			}
			Err(err) => {
				debug_log!("email rejected: {}", err);
				self.validation.set(ValidationState::Invalid);
				self.show_error(&self.config.invalid_email_message);
				false
			}
		}
	}

	/// Shows `message` in the error region and marks the input invalid.
	pub fn show_error(&self, message: &str) {
		self.view.set_error(Some(message));
		self.view.set_invalid(true);
	}

	/// Hides the error region and removes the invalid marker.
	///
	/// A displayed validation error reverts the field to
	/// [`ValidationState::Untouched`]; a displayed submission failure is
	/// acknowledged back to [`SubmissionState::Idle`].
	pub fn clear_error(&self) {
		self.view.set_error(None);
		self.view.set_invalid(false);

		if self.validation.get() == ValidationState::Invalid {
			self.validation.set(ValidationState::Untouched);
		}
		if self.submission.get() == SubmissionState::Failed {
			// Failed always accepts Acknowledge.
			let _ = self.transition(SubmissionEvent::Acknowledge);
		}
	}

	/// `input` event on the email field.
	pub fn on_input(&self) -> bool {
		self.validate_email()
	}

	/// `blur` event on the email field.
	pub fn on_blur(&self) -> bool {
		self.validate_email()
	}

	/// `focus` event on the email field.
	pub fn on_focus(&self) {
		self.clear_error();
	}

	/// `keydown` event on the document.
	///
	/// Enter pressed anywhere but the email field moves focus to the field.
	/// Returns `true` when the caller should suppress the key's default
	/// action.
	pub fn on_keydown(&self, key: &str) -> bool {
		if !self.config.enter_focuses_input
			|| key != "Enter"
			|| self.view.input_has_focus()
			|| self.submission.get() == SubmissionState::Succeeded
		{
			return false;
		}

		self.view.focus_input();
		true
	}

	/// Validates and submits the form.
	///
	/// The native submission must already have been suppressed by the
	/// caller. At most one request is in flight per controller: calls made
	/// while [`SubmissionState::Submitting`] (or after success) return
	/// [`SubmitOutcome::Ignored`] without touching the page.
	pub async fn handle_submit(&self) -> SubmitOutcome {
		let state = self.submission.get();
		if !state.accepts_submit() {
			warn_log!("signup submit ignored while {:?}", state);
			return SubmitOutcome::Ignored;
		}

		if !self.validate_email() {
			self.view.focus_input();
			return SubmitOutcome::Invalid;
		}

		if let Err(err) = self.transition(SubmissionEvent::Begin) {
			warn_log!("signup submit ignored: {}", err);
			return SubmitOutcome::Ignored;
		}
		self.set_loading_state(true);

		match self.submit().await {
			Ok(_) => {
				let _ = self.transition(SubmissionEvent::Succeed);
				info_log!("signup submitted");
				self.handle_success();
				SubmitOutcome::Succeeded
			}
			Err(err) => {
				let _ = self.transition(SubmissionEvent::Fail);
				error_log!("signup submission failed: {}", err);
				self.handle_error();
				self.set_loading_state(false);
				SubmitOutcome::Failed(err)
			}
		}
	}

	async fn submit(&self) -> Result<serde_json::Value, SubmitError> {
		let request = SubmitRequest {
			action: self.view.form_action(),
			fields: self.view.form_fields()?,
		};
		info_log!("posting signup form to {}", request.action);

		let response = self.transport.post(&request).await?;
		if !response.is_ok() {
			return Err(SubmitError::Status(response.status));
		}

		serde_json::from_str(&response.body).map_err(SubmitError::Parse)
	}

	fn set_loading_state(&self, loading: bool) {
		self.view.set_loading(loading);
		self.view.set_controls_disabled(loading);
	}

	fn handle_success(&self) {
		self.view.show_success(&self.config.success);
	}

	fn handle_error(&self) {
		self.show_error(&self.config.submit_failed_message);
	}

	fn transition(&self, event: SubmissionEvent) -> Result<SubmissionState, TransitionError> {
		let from = self.submission.get();
		let to = from.apply(event)?;
		debug_log!("submission: {:?} --{:?}--> {:?}", from, event, to);
		self.submission.set(to);
		Ok(to)
	}
}

/// Trims `value` the way the browser trims input values.
///
/// Unicode `White_Space` minus U+0085 (NEL), plus U+FEFF (BOM).
fn trim_input(value: &str) -> &str {
	value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}')
}
