//! Browser binding (WASM only)
//!
//! [`DomView`] resolves the form's elements once, at construction, and
//! implements [`SignupView`] over them. [`mount`] wires a controller to the
//! page's events; [`mount_on_ready`] defers that until `DOMContentLoaded`
//! when the document is still loading.
//!
//! ```ignore
//! use signup_pages::dom::mount_on_ready;
//! use signup_pages::SignupConfig;
//!
//! mount_on_ready(SignupConfig::default().with_ids("waitlist", "waitlist-email", "waitlist-error"))?;
//! ```
//!
//! For pages without a Rust entry point, [`start`] and [`start_with_config`]
//! are exported to JavaScript.

use crate::config::{SignupConfig, SuccessContent};
use crate::controller::SignupFormController;
use crate::error::SignupError;
use crate::transport::{FormFields, HttpTransport, SubmitError};
use crate::view::SignupView;
use crate::{error_log, info_log, warn_log};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

/// Controller type produced by [`mount`].
pub type DomController = SignupFormController<DomView, HttpTransport>;

impl From<JsValue> for SignupError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}

impl From<SignupError> for JsValue {
	fn from(err: SignupError) -> Self {
		JsValue::from_str(&err.to_string())
	}
}

/// [`SignupView`] over live DOM elements
#[derive(Debug, Clone)]
pub struct DomView {
	document: Document,
	form: HtmlFormElement,
	input: HtmlInputElement,
	error: Element,
	submit: Element,
	error_visible_class: String,
	loading_class: String,
}

impl DomView {
	/// Looks up the form's elements in `document`.
	///
	/// # Errors
	///
	/// [`SignupError::ElementNotFound`] if an element is missing and
	/// [`SignupError::ElementType`] if the form or input has the wrong type.
	pub fn resolve(document: &Document, config: &SignupConfig) -> Result<Self, SignupError> {
		let form = element_by_id(document, &config.form_id)?
			.dyn_into::<HtmlFormElement>()
			.map_err(|_| SignupError::ElementType {
				selector: config.form_id.clone(),
				expected: "HTMLFormElement",
			})?;
		let input = element_by_id(document, &config.input_id)?
			.dyn_into::<HtmlInputElement>()
			.map_err(|_| SignupError::ElementType {
				selector: config.input_id.clone(),
				expected: "HTMLInputElement",
			})?;
		let error = element_by_id(document, &config.error_id)?;
		let submit = document
			.query_selector(&config.submit_selector)?
			.ok_or_else(|| SignupError::ElementNotFound(config.submit_selector.clone()))?;

		Ok(Self {
			document: document.clone(),
			form,
			input,
			error,
			submit,
			error_visible_class: config.error_visible_class.clone(),
			loading_class: config.loading_class.clone(),
		})
	}

	/// The bound form element.
	pub fn form(&self) -> &HtmlFormElement {
		&self.form
	}

	/// The bound email input.
	pub fn input(&self) -> &HtmlInputElement {
		&self.input
	}

	fn build_success(&self, content: &SuccessContent) -> Result<Element, JsValue> {
		let wrapper = self.document.create_element("div")?;
		wrapper.set_class_name(&content.class);

		let icon = self.document.create_element("div")?;
		icon.set_class_name(&format!("{}__icon", content.class));
		icon.set_text_content(Some(&content.icon));

		let heading = self.document.create_element("h2")?;
		heading.set_text_content(Some(&content.heading));

		let message = self.document.create_element("p")?;
		message.set_text_content(Some(&content.message));

		wrapper.append_child(&icon)?;
		wrapper.append_child(&heading)?;
		wrapper.append_child(&message)?;
		Ok(wrapper)
	}
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, SignupError> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| SignupError::ElementNotFound(format!("#{}", id)))
}

fn log_dom_error(action: &str, result: Result<(), JsValue>) {
	if let Err(err) = result {
		warn_log!("failed to {}: {:?}", action, err);
	}
}

impl SignupView for DomView {
	fn email_value(&self) -> String {
		self.input.value()
	}

	fn form_action(&self) -> String {
		self.form.action()
	}

	fn form_fields(&self) -> Result<FormFields, SubmitError> {
		let data = web_sys::FormData::new_with_form(&self.form)
			.map_err(|e| SubmitError::FormData(format!("{:?}", e)))?;
		let entries = js_sys::try_iter(&data)
			.map_err(|e| SubmitError::FormData(format!("{:?}", e)))?
			.ok_or_else(|| SubmitError::FormData("FormData is not iterable".to_string()))?;

		let mut fields = FormFields::new();
		for entry in entries {
			let entry = js_sys::Array::from(&entry.map_err(|e| SubmitError::FormData(format!("{:?}", e)))?);
			// File inputs yield Blob values, which this form never carries.
			if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
				fields.push(name, value);
			}
		}
		Ok(fields)
	}

	fn set_error(&self, message: Option<&str>) {
		self.error.set_text_content(message);
		let classes = self.error.class_list();
		let result = match message {
			Some(_) => classes.add_1(&self.error_visible_class),
			None => classes.remove_1(&self.error_visible_class),
		};
		log_dom_error("toggle error class", result);
	}

	fn set_invalid(&self, invalid: bool) {
		let result = if invalid {
			self.input.set_attribute("aria-invalid", "true")
		} else {
			self.input.remove_attribute("aria-invalid")
		};
		log_dom_error("update aria-invalid", result);
	}

	fn set_loading(&self, loading: bool) {
		let classes = self.submit.class_list();
		let result = if loading {
			classes.add_1(&self.loading_class)
		} else {
			classes.remove_1(&self.loading_class)
		};
		log_dom_error("toggle loading class", result);
	}

	fn set_controls_disabled(&self, disabled: bool) {
		self.input.set_disabled(disabled);
		// The submit control may be a <button> or an <input type="submit">.
		let result = if disabled {
			self.submit.set_attribute("disabled", "")
		} else {
			self.submit.remove_attribute("disabled")
		};
		log_dom_error("toggle submit disabled", result);
	}

	fn focus_input(&self) {
		log_dom_error("focus email input", self.input.focus());
	}

	fn input_has_focus(&self) -> bool {
		let input: &web_sys::Node = self.input.as_ref();
		self.document
			.active_element()
			.is_some_and(|active| active.is_same_node(Some(input)))
	}

	fn show_success(&self, content: &SuccessContent) {
		match self.build_success(content) {
			Ok(panel) => {
				self.form.set_inner_html("");
				log_dom_error("show success message", self.form.append_child(&panel).map(|_| ()));
			}
			Err(err) => error_log!("failed to build success message: {:?}", err),
		}
	}
}

/// Binds a controller to the page's signup form and wires its events.
///
/// The returned controller is also kept alive by the registered listeners.
pub fn mount(config: SignupConfig) -> Result<Rc<DomController>, SignupError> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or(SignupError::NoDocument)?;
	let view = DomView::resolve(&document, &config)?;
	let controller = Rc::new(SignupFormController::new(view, HttpTransport::new(), config));

	attach_listeners(&document, &controller)?;
	info_log!("signup form mounted on #{}", controller.config().form_id);
	Ok(controller)
}

/// Calls [`mount`] now, or on `DOMContentLoaded` if the document is still
/// loading. Errors from a deferred mount are logged.
pub fn mount_on_ready(config: SignupConfig) -> Result<(), SignupError> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or(SignupError::NoDocument)?;

	if document.ready_state() != "loading" {
		return mount(config).map(|_| ());
	}

	let mut config = Some(config);
	let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
		if let Some(config) = config.take()
			&& let Err(err) = mount(config)
		{
			error_log!("failed to mount signup form: {}", err);
		}
	}) as Box<dyn FnMut(_)>);
	document.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

fn attach_listeners(document: &Document, controller: &Rc<DomController>) -> Result<(), SignupError> {
	let input = controller.view().input().clone();

	listen(&input, "input", {
		let controller = controller.clone();
		move |_| {
			controller.on_input();
		}
	})?;
	listen(&input, "blur", {
		let controller = controller.clone();
		move |_| {
			controller.on_blur();
		}
	})?;
	listen(&input, "focus", {
		let controller = controller.clone();
		move |_| controller.on_focus()
	})?;
	listen(controller.view().form(), "submit", {
		let controller = controller.clone();
		move |event: web_sys::Event| {
			event.prevent_default();
			let controller = controller.clone();
			wasm_bindgen_futures::spawn_local(async move {
				controller.handle_submit().await;
			});
		}
	})?;
	listen(document, "keydown", {
		let controller = controller.clone();
		move |event: web_sys::Event| {
			if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>()
				&& controller.on_keydown(&event.key())
			{
				event.prevent_default();
			}
		}
	})?;
	Ok(())
}

fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), SignupError>
where
	F: FnMut(web_sys::Event) + 'static,
{
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
	target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

/// Mounts the signup controller with the default configuration.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	mount_on_ready(SignupConfig::default())?;
	Ok(())
}

/// Mounts the signup controller with a JSON configuration document.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config: &str) -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	mount_on_ready(SignupConfig::from_json(config)?)?;
	Ok(())
}
