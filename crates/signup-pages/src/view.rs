//! View abstraction
//!
//! [`SignupView`] is everything the controller does to the page. The browser
//! implementation is `dom::DomView`; [`MemoryView`] keeps the same state in
//! memory so the controller can be driven without a document.

use crate::config::SuccessContent;
use crate::transport::{FormFields, SubmitError};
use std::cell::RefCell;

/// UI operations the signup controller performs.
///
/// Methods take `&self`: DOM handles are shared references and all
/// mutation happens on one thread.
pub trait SignupView {
	/// Current raw value of the email input.
	fn email_value(&self) -> String;

	/// URL the form submits to.
	fn form_action(&self) -> String;

	/// The form's fields, as `FormData` would collect them.
	fn form_fields(&self) -> Result<FormFields, SubmitError>;

	/// Shows `message` in the error region, or hides the region on `None`.
	fn set_error(&self, message: Option<&str>);

	/// Sets or removes `aria-invalid` on the input.
	fn set_invalid(&self, invalid: bool);

	/// Toggles the loading indicator on the submit control.
	fn set_loading(&self, loading: bool);

	/// Enables or disables both the input and the submit control.
	fn set_controls_disabled(&self, disabled: bool);

	/// Moves focus to the email input.
	fn focus_input(&self);

	/// Whether the email input currently has focus.
	fn input_has_focus(&self) -> bool;

	/// Replaces the form's content with `content`.
	fn show_success(&self, content: &SuccessContent);
}

/// Snapshot of a [`MemoryView`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryViewState {
	/// Email input value
	pub email: String,
	/// Form action URL
	pub action: String,
	/// Fields besides the email
	pub extra_fields: FormFields,
	/// Error region text; empty when hidden
	pub error_text: String,
	/// Whether the error region carries its visible class
	pub error_visible: bool,
	/// `aria-invalid` on the input
	pub aria_invalid: bool,
	/// Loading class on the submit control
	pub loading: bool,
	/// `disabled` on the input and submit control
	pub controls_disabled: bool,
	/// Whether the input has focus
	pub input_focused: bool,
	/// Number of `focus_input` calls
	pub focus_requests: usize,
	/// Content that replaced the form, if any
	pub success: Option<SuccessContent>,
}

/// In-memory [`SignupView`]
///
/// The email field is submitted under `email_field_name` followed by any
/// extra fields, mirroring the document order of the standard markup.
#[derive(Debug)]
pub struct MemoryView {
	state: RefCell<MemoryViewState>,
	email_field_name: String,
}

impl MemoryView {
	/// Creates a view posting to `action` with an empty email input.
	pub fn new(action: impl Into<String>) -> Self {
		Self {
			state: RefCell::new(MemoryViewState {
				action: action.into(),
				..Default::default()
			}),
			email_field_name: "email".to_string(),
		}
	}

	/// Sets the initial email value.
	pub fn with_email(self, email: impl Into<String>) -> Self {
		self.state.borrow_mut().email = email.into();
		self
	}

	/// Adds a non-email field to the submitted form data.
	pub fn with_field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.state.borrow_mut().extra_fields.push(name, value);
		self
	}

	/// Simulates typing into the input.
	pub fn type_email(&self, email: impl Into<String>) {
		self.state.borrow_mut().email = email.into();
	}

	/// Simulates the input losing focus.
	pub fn blur_input(&self) {
		self.state.borrow_mut().input_focused = false;
	}

	/// Copy of the current state.
	pub fn snapshot(&self) -> MemoryViewState {
		self.state.borrow().clone()
	}

	/// Error region text.
	pub fn error_text(&self) -> String {
		self.state.borrow().error_text.clone()
	}

	/// Whether the error region is visible.
	pub fn error_visible(&self) -> bool {
		self.state.borrow().error_visible
	}

	/// Whether the input and submit control are disabled.
	pub fn controls_disabled(&self) -> bool {
		self.state.borrow().controls_disabled
	}

	/// Whether the submit control shows the loading indicator.
	pub fn loading(&self) -> bool {
		self.state.borrow().loading
	}

	/// Content that replaced the form, if any.
	pub fn success(&self) -> Option<SuccessContent> {
		self.state.borrow().success.clone()
	}
}

impl SignupView for MemoryView {
	fn email_value(&self) -> String {
		self.state.borrow().email.clone()
	}

	fn form_action(&self) -> String {
		self.state.borrow().action.clone()
	}

	fn form_fields(&self) -> Result<FormFields, SubmitError> {
		let state = self.state.borrow();
		let mut fields = FormFields::new();
		fields.push(self.email_field_name.clone(), state.email.clone());
		for (name, value) in state.extra_fields.iter() {
			fields.push(name, value);
		}
		Ok(fields)
	}

	fn set_error(&self, message: Option<&str>) {
		let mut state = self.state.borrow_mut();
		match message {
			Some(message) => {
				state.error_text = message.to_string();
				state.error_visible = true;
			}
			None => {
				state.error_text.clear();
				state.error_visible = false;
			}
		}
	}

	fn set_invalid(&self, invalid: bool) {
		self.state.borrow_mut().aria_invalid = invalid;
	}

	fn set_loading(&self, loading: bool) {
		self.state.borrow_mut().loading = loading;
	}

	fn set_controls_disabled(&self, disabled: bool) {
		let mut state = self.state.borrow_mut();
		state.controls_disabled = disabled;
		if disabled {
			state.input_focused = false;
		}
	}

	fn focus_input(&self) {
		let mut state = self.state.borrow_mut();
		state.focus_requests += 1;
		state.input_focused = !state.controls_disabled && state.success.is_none();
	}

	fn input_has_focus(&self) -> bool {
		self.state.borrow().input_focused
	}

	fn show_success(&self, content: &SuccessContent) {
		let mut state = self.state.borrow_mut();
		state.success = Some(content.clone());
		state.input_focused = false;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_form_fields_put_email_first() {
		let view = MemoryView::new("/subscribe")
			.with_email("user@example.com")
			.with_field("source", "landing");

		let fields = view.form_fields().unwrap();
		assert_eq!(
			fields.iter().collect::<Vec<_>>(),
			vec![("email", "user@example.com"), ("source", "landing")]
		);
		assert_eq!(view.form_action(), "/subscribe");
	}

	#[rstest]
	fn test_set_error_toggles_visibility() {
		let view = MemoryView::new("/subscribe");

		view.set_error(Some("bad"));
		assert_eq!(view.error_text(), "bad");
		assert!(view.error_visible());

		view.set_error(None);
		assert_eq!(view.error_text(), "");
		assert!(!view.error_visible());
	}

	#[rstest]
	fn test_disabled_input_cannot_take_focus() {
		let view = MemoryView::new("/subscribe");
		view.focus_input();
		assert!(view.input_has_focus());

		view.set_controls_disabled(true);
		assert!(!view.input_has_focus());
		view.focus_input();
		assert!(!view.input_has_focus());
		assert_eq!(view.snapshot().focus_requests, 2);
	}
}
