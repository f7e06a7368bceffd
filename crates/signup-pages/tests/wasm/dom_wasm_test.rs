//! DomView Browser Tests
//!
//! Builds the standard signup markup in a real document and checks that
//! `DomView` resolves it and reflects controller state into the DOM.
//!
//! **Run with**: `wasm-pack test --chrome --headless crates/signup-pages`

#![cfg(target_arch = "wasm32")]

use signup_pages::dom::{DomView, mount};
use signup_pages::{SignupConfig, SignupError, SignupView, SuccessContent};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Test Fixtures
// ============================================================================

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Inserts the standard markup under a fresh container with prefixed ids.
fn fixture(prefix: &str) -> SignupConfig {
	let document = document();
	let container = document.create_element("div").unwrap();
	container.set_inner_html(&format!(
		r#"<form id="{p}-form" action="/subscribe" method="post">
			<input id="{p}-email" name="email" type="email">
			<input type="hidden" name="source" value="test">
			<div id="{p}-error"></div>
			<button class="{p}-submit" type="submit">Notify me</button>
		</form>"#,
		p = prefix
	));
	document.body().unwrap().append_child(&container).unwrap();

	SignupConfig::default()
		.with_ids(
			format!("{prefix}-form"),
			format!("{prefix}-email"),
			format!("{prefix}-error"),
		)
		.with_submit_selector(format!(".{prefix}-submit"))
}

fn resolve(config: &SignupConfig) -> DomView {
	DomView::resolve(&document(), config).unwrap()
}

// ============================================================================
// Resolution
// ============================================================================

#[wasm_bindgen_test]
fn test_resolve_missing_element() {
	let config = fixture("missing").with_ids("missing-form", "nope", "missing-error");

	let result = DomView::resolve(&document(), &config);

	assert!(matches!(result, Err(SignupError::ElementNotFound(id)) if id == "#nope"));
}

#[wasm_bindgen_test]
fn test_resolve_wrong_element_type() {
	let config = fixture("wrongtype").with_ids("wrongtype-form", "wrongtype-error", "wrongtype-error");

	let result = DomView::resolve(&document(), &config);

	assert!(matches!(result, Err(SignupError::ElementType { .. })));
}

// ============================================================================
// View Operations
// ============================================================================

#[wasm_bindgen_test]
fn test_form_fields_follow_document_order() {
	let view = resolve(&fixture("fields"));
	view.input().set_value("user@example.com");

	let fields = view.form_fields().unwrap();

	assert_eq!(
		fields.iter().collect::<Vec<_>>(),
		vec![("email", "user@example.com"), ("source", "test")]
	);
	assert!(view.form_action().ends_with("/subscribe"));
}

#[wasm_bindgen_test]
fn test_error_region_and_aria_invalid() {
	let config = fixture("errors");
	let view = resolve(&config);
	let error = document().get_element_by_id("errors-error").unwrap();

	view.set_error(Some("Please enter a valid email address"));
	view.set_invalid(true);
	assert_eq!(error.text_content().unwrap(), "Please enter a valid email address");
	assert!(error.class_list().contains("show"));
	assert_eq!(view.input().get_attribute("aria-invalid").as_deref(), Some("true"));

	view.set_error(None);
	view.set_invalid(false);
	assert_eq!(error.text_content().unwrap(), "");
	assert!(!error.class_list().contains("show"));
	assert!(view.input().get_attribute("aria-invalid").is_none());
}

#[wasm_bindgen_test]
fn test_loading_disables_controls() {
	let view = resolve(&fixture("loading"));
	let submit = document().query_selector(".loading-submit").unwrap().unwrap();

	view.set_loading(true);
	view.set_controls_disabled(true);
	assert!(submit.class_list().contains("loading"));
	assert!(submit.has_attribute("disabled"));
	assert!(view.input().disabled());

	view.set_loading(false);
	view.set_controls_disabled(false);
	assert!(!submit.class_list().contains("loading"));
	assert!(!submit.has_attribute("disabled"));
	assert!(!view.input().disabled());
}

#[wasm_bindgen_test]
fn test_focus_tracking() {
	let view = resolve(&fixture("focus"));

	view.focus_input();

	assert!(view.input_has_focus());
}

#[wasm_bindgen_test]
fn test_success_replaces_form_content() {
	let view = resolve(&fixture("success"));

	view.show_success(&SuccessContent::default());

	let form = view.form();
	assert!(form.query_selector("input").unwrap().is_none());
	let heading = form.query_selector("h2").unwrap().unwrap();
	assert_eq!(heading.text_content().unwrap(), "Thank You!");
	assert!(form.query_selector(".signup-success").unwrap().is_some());
}

// ============================================================================
// Mounted Controller
// ============================================================================

#[wasm_bindgen_test]
fn test_mount_wires_input_validation() {
	let controller = mount(fixture("mounted")).unwrap();
	let input = document()
		.get_element_by_id("mounted-email")
		.unwrap()
		.dyn_into::<HtmlInputElement>()
		.unwrap();
	let error = document().get_element_by_id("mounted-error").unwrap();

	input.set_value("user@@example");
	input
		.dispatch_event(&web_sys::Event::new("input").unwrap())
		.unwrap();
	assert_eq!(error.text_content().unwrap(), "Please enter a valid email address");

	input
		.dispatch_event(&web_sys::Event::new("focus").unwrap())
		.unwrap();
	assert_eq!(error.text_content().unwrap(), "");
	assert_eq!(
		controller.validation_state(),
		signup_pages::ValidationState::Untouched
	);
}
