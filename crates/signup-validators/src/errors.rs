//! Validation error types

use thiserror::Error;

/// Errors produced by the validators in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// The value is not a syntactically valid email address.
	#[error("Invalid email: {0}")]
	InvalidEmail(String),
}

/// Result alias for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
