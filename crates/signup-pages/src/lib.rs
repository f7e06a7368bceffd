//! Signup Pages - WASM email signup form controller
//!
//! Binds to an existing signup form in the page, validates the email field as
//! the user types, and posts the form to its `action` URL with a loading state
//! and success/failure transitions.
//!
//! ## Architecture
//!
//! ```text
//!  browser events            SignupFormController              seams
//! ┌──────────────┐         ┌───────────────────────┐       ┌───────────────┐
//! │ input / blur │───────▶ │ validate_email()      │──────▶│ SignupView    │──▶ DOM
//! │ focus        │───────▶ │ clear_error()         │       │ (DomView,     │
//! │ submit       │───────▶ │ handle_submit()       │       │  MemoryView)  │
//! │ keydown      │───────▶ │ on_keydown()          │       └───────────────┘
//! └──────────────┘         │                       │       ┌───────────────┐
//!                          │ SubmissionState       │──────▶│SubmitTransport│──▶ POST
//!                          │ ValidationState       │       │ (HttpTransport)│
//!                          └───────────────────────┘       └───────────────┘
//! ```
//!
//! - [`controller`]: the controller and its event entry points
//! - [`state`]: validation and submission state machines
//! - [`view`]: the [`SignupView`] seam and the in-memory [`MemoryView`]
//! - [`transport`]: the [`SubmitTransport`] seam and the reqwest-backed [`HttpTransport`]
//! - [`config`]: element ids, class names and user-facing messages
//! - `dom` (wasm32 only): `web-sys` binding and `mount` entry points
//! - [`logging`]: console/tracing logging macros
//!
//! ## Example
//!
//! ```ignore
//! use signup_pages::dom::mount_on_ready;
//! use signup_pages::SignupConfig;
//!
//! mount_on_ready(SignupConfig::default())?;
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod state;
pub mod transport;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::{SignupConfig, SuccessContent};
pub use controller::{SignupFormController, SubmitOutcome};
pub use error::SignupError;
pub use state::{SubmissionEvent, SubmissionState, TransitionError, ValidationState};
pub use transport::{
	FormFields, HttpTransport, SubmitError, SubmitRequest, SubmitTransport, TransportResponse,
};
pub use view::{MemoryView, SignupView};

pub use signup_validators::{EmailGrammar, EmailValidator};

#[doc(hidden)]
pub mod __private {
	pub use tracing;

	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
