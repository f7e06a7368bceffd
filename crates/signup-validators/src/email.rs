//! Email syntax validation
//!
//! Two grammars are available. [`EmailGrammar::Standard`] is the default and
//! follows the HTML living standard's "valid email address" production:
//! a permissive local part, then one or more dot-separated DNS labels of at
//! most 63 characters that neither start nor end with a hyphen.
//!
//! [`EmailGrammar::Legacy`] is the older, much narrower check
//! (`name@domain.tld` with a 2-4 letter lowercase TLD). It is kept for pages
//! that still depend on its behavior.

use crate::{ValidationError, ValidationResult, Validator};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const STANDARD_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?)*$";

const LEGACY_PATTERN: &str = r"^[A-Za-z0-9._\-]+@[A-Za-z]+\.[a-z]{2,4}$";

static STANDARD_REGEX: OnceLock<Regex> = OnceLock::new();
static LEGACY_REGEX: OnceLock<Regex> = OnceLock::new();

/// Email grammar selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailGrammar {
	/// Local part of `[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+`, then DNS labels.
	#[default]
	Standard,
	/// `[A-Za-z0-9._-]+@[A-Za-z]+\.[a-z]{2,4}`
	Legacy,
}

impl EmailGrammar {
	/// Returns the compiled pattern for this grammar.
	pub fn regex(self) -> &'static Regex {
		match self {
			// Patterns are compile-time constants covered by the tests below.
			Self::Standard => STANDARD_REGEX.get_or_init(|| Regex::new(STANDARD_PATTERN).unwrap()),
			Self::Legacy => LEGACY_REGEX.get_or_init(|| Regex::new(LEGACY_PATTERN).unwrap()),
		}
	}

	/// Returns `true` if `value` matches this grammar exactly.
	pub fn matches(self, value: &str) -> bool {
		self.regex().is_match(value)
	}
}

/// Email address validator
///
/// The validator does not trim its input; callers decide whether
/// surrounding whitespace is significant.
///
/// # Examples
///
/// ```
/// use signup_validators::{EmailGrammar, EmailValidator, Validator};
///
/// let validator = EmailValidator::default();
/// assert!(validator.validate("first.last+tag@sub.example.co.uk").is_ok());
///
/// let legacy = EmailValidator::new(EmailGrammar::Legacy);
/// assert!(legacy.validate("user@sub.example.com").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
	grammar: EmailGrammar,
	message: Option<String>,
}

impl EmailValidator {
	/// Creates a validator for the given grammar.
	pub fn new(grammar: EmailGrammar) -> Self {
		Self {
			grammar,
			message: None,
		}
	}

	/// Sets the message carried by [`ValidationError::InvalidEmail`].
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// The grammar this validator checks against.
	pub fn grammar(&self) -> EmailGrammar {
		self.grammar
	}

	/// Shorthand for `validate(value).is_ok()`.
	pub fn is_valid(&self, value: &str) -> bool {
		self.grammar.matches(value)
	}
}

impl Validator<str> for EmailValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if self.grammar.matches(value) {
			Ok(())
		} else {
			let message = self
				.message
				.clone()
				.unwrap_or_else(|| format!("'{}' is not a valid email address", value));
			Err(ValidationError::InvalidEmail(message))
		}
	}
}

impl Validator<String> for EmailValidator {
	fn validate(&self, value: &String) -> ValidationResult<()> {
		<Self as Validator<str>>::validate(self, value.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("user@example.com")]
	#[case("user@localhost")]
	#[case("first.last+tag@sub.example.co.uk")]
	#[case("o'brien@example.ie")]
	#[case("weird!#$%&*/=?^_`{|}~-@example.com")]
	#[case("user@xn--bcher-kva.example")]
	#[case("user@123.example")]
	fn test_standard_accepts(#[case] email: &str) {
		let validator = EmailValidator::new(EmailGrammar::Standard);
		assert!(validator.validate(email).is_ok(), "expected {email} to be valid");
	}

	#[rstest]
	#[case("user@@example")]
	#[case("user")]
	#[case("@example.com")]
	#[case("user@")]
	#[case("user@-example.com")]
	#[case("user@example-.com")]
	#[case("user@example..com")]
	#[case("user@example.com.")]
	#[case("user name@example.com")]
	#[case("user@exa mple.com")]
	#[case(" user@example.com")]
	fn test_standard_rejects(#[case] email: &str) {
		let validator = EmailValidator::new(EmailGrammar::Standard);
		assert!(
			validator.validate(email).is_err(),
			"expected {email} to be invalid"
		);
	}

	#[rstest]
	fn test_standard_label_length_limit() {
		let validator = EmailValidator::default();
		let label_63 = "a".repeat(63);
		let label_64 = "a".repeat(64);

		assert!(validator.is_valid(&format!("user@{label_63}.com")));
		assert!(!validator.is_valid(&format!("user@{label_64}.com")));
	}

	#[rstest]
	#[case("user@example.com", true)]
	#[case("a_b-c.d@mail.org", true)]
	#[case("user@localhost", false)]
	#[case("user@example.museum", false)]
	#[case("user@Example.COM", false)]
	#[case("user@sub.example.com", false)]
	#[case("user+tag@example.com", false)]
	fn test_legacy_grammar(#[case] email: &str, #[case] expected: bool) {
		let validator = EmailValidator::new(EmailGrammar::Legacy);
		assert_eq!(validator.is_valid(email), expected, "{email}");
	}

	#[rstest]
	fn test_custom_message() {
		let validator = EmailValidator::default().with_message("Please enter a valid email address");

		assert_eq!(
			validator.validate("nope"),
			Err(ValidationError::InvalidEmail(
				"Please enter a valid email address".to_string()
			))
		);
	}

	#[rstest]
	fn test_default_message_names_value() {
		let validator = EmailValidator::default();

		match validator.validate("nope") {
			Err(ValidationError::InvalidEmail(msg)) => assert!(msg.contains("nope")),
			other => panic!("expected InvalidEmail, got {other:?}"),
		}
	}

	#[rstest]
	fn test_string_impl_delegates() {
		let validator = EmailValidator::default();
		assert!(validator.validate(&"user@example.com".to_string()).is_ok());
	}

	#[rstest]
	fn test_grammar_serde_names() {
		assert_eq!(
			serde_json::from_str::<EmailGrammar>("\"legacy\"").unwrap(),
			EmailGrammar::Legacy
		);
		assert_eq!(
			serde_json::to_string(&EmailGrammar::Standard).unwrap(),
			"\"standard\""
		);
		assert_eq!(EmailGrammar::default(), EmailGrammar::Standard);
	}
}
