//! Email validators
//!
//! Re-exports `signup-validators`.

pub use signup_validators::*;
