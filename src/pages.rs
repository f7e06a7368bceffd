//! Signup form controller
//!
//! Re-exports `signup-pages`: the controller, its state machines, the view
//! and transport seams, and (on wasm32) the DOM binding.
//!
//! ## Example
//!
//! ```rust
//! use signup::pages::{HttpTransport, MemoryView, SignupConfig, SignupFormController};
//!
//! let controller = SignupFormController::new(
//!     MemoryView::new("https://example.com/subscribe").with_email("user@example.com"),
//!     HttpTransport::new(),
//!     SignupConfig::default(),
//! );
//! assert!(controller.validate_email());
//! ```

pub use signup_pages::*;
