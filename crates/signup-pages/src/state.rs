//! Validation and submission state machines
//!
//! ```text
//! Idle ──begin──▶ Submitting ──succeed──▶ Succeeded (terminal)
//!  ▲                 │   ▲
//!  │                fail │
//!  │                 ▼   │ begin
//!  └──acknowledge── Failed
//! ```
//!
//! Transitions are plain functions on [`SubmissionState`] so they can be
//! exercised without a controller or a browser.

use thiserror::Error;

/// Syntactic state of the email field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationState {
	/// Empty, or the last error was cleared.
	#[default]
	Untouched,
	/// Matches the configured grammar.
	Valid,
	/// Non-empty and does not match the grammar.
	Invalid,
}

/// Lifecycle of the signup POST
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
	/// No submission in flight.
	#[default]
	Idle,
	/// Exactly one request in flight; controls are disabled.
	Submitting,
	/// The server accepted the signup. Terminal for the page's lifetime.
	Succeeded,
	/// The last submission failed; the form is interactive again.
	Failed,
}

/// Events driving [`SubmissionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
	/// A valid form was submitted.
	Begin,
	/// The server answered 2xx with a JSON body.
	Succeed,
	/// Non-2xx status, transport failure or unparseable body.
	Fail,
	/// The failure message was cleared by the user.
	Acknowledge,
}

/// A transition that the state machine does not allow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot apply {event:?} while {state:?}")]
pub struct TransitionError {
	/// State the machine was in
	pub state: SubmissionState,
	/// Rejected event
	pub event: SubmissionEvent,
}

impl SubmissionState {
	/// Applies `event`, returning the next state.
	pub fn apply(self, event: SubmissionEvent) -> Result<Self, TransitionError> {
		use SubmissionEvent::*;
		use SubmissionState::*;

		match (self, event) {
			(Idle | Failed, Begin) => Ok(Submitting),
			(Submitting, Succeed) => Ok(Succeeded),
			(Submitting, Fail) => Ok(Failed),
			(Failed, Acknowledge) => Ok(Idle),
			(state, event) => Err(TransitionError { state, event }),
		}
	}

	/// `Idle | Failed -> Submitting`
	pub fn begin(self) -> Result<Self, TransitionError> {
		self.apply(SubmissionEvent::Begin)
	}

	/// `Submitting -> Succeeded`
	pub fn succeed(self) -> Result<Self, TransitionError> {
		self.apply(SubmissionEvent::Succeed)
	}

	/// `Submitting -> Failed`
	pub fn fail(self) -> Result<Self, TransitionError> {
		self.apply(SubmissionEvent::Fail)
	}

	/// `Failed -> Idle`
	pub fn acknowledge(self) -> Result<Self, TransitionError> {
		self.apply(SubmissionEvent::Acknowledge)
	}

	/// Whether a new submission may start from this state.
	pub fn accepts_submit(self) -> bool {
		matches!(self, Self::Idle | Self::Failed)
	}

	/// Whether the form's controls should be disabled.
	pub fn locks_controls(self) -> bool {
		self == Self::Submitting
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(SubmissionState::Idle, SubmissionEvent::Begin, SubmissionState::Submitting)]
	#[case(SubmissionState::Failed, SubmissionEvent::Begin, SubmissionState::Submitting)]
	#[case(SubmissionState::Submitting, SubmissionEvent::Succeed, SubmissionState::Succeeded)]
	#[case(SubmissionState::Submitting, SubmissionEvent::Fail, SubmissionState::Failed)]
	#[case(SubmissionState::Failed, SubmissionEvent::Acknowledge, SubmissionState::Idle)]
	fn test_allowed_transitions(
		#[case] from: SubmissionState,
		#[case] event: SubmissionEvent,
		#[case] to: SubmissionState,
	) {
		assert_eq!(from.apply(event), Ok(to));
	}

	#[rstest]
	#[case(SubmissionState::Submitting, SubmissionEvent::Begin)]
	#[case(SubmissionState::Idle, SubmissionEvent::Succeed)]
	#[case(SubmissionState::Idle, SubmissionEvent::Fail)]
	#[case(SubmissionState::Idle, SubmissionEvent::Acknowledge)]
	#[case(SubmissionState::Submitting, SubmissionEvent::Acknowledge)]
	#[case(SubmissionState::Failed, SubmissionEvent::Fail)]
	fn test_rejected_transitions(#[case] from: SubmissionState, #[case] event: SubmissionEvent) {
		assert_eq!(
			from.apply(event),
			Err(TransitionError { state: from, event })
		);
	}

	#[rstest]
	fn test_succeeded_is_terminal() {
		for event in [
			SubmissionEvent::Begin,
			SubmissionEvent::Succeed,
			SubmissionEvent::Fail,
			SubmissionEvent::Acknowledge,
		] {
			assert!(SubmissionState::Succeeded.apply(event).is_err());
		}
	}

	#[rstest]
	fn test_named_transitions_walk_the_happy_path() {
		let state = SubmissionState::default()
			.begin()
			.and_then(SubmissionState::fail)
			.and_then(SubmissionState::begin)
			.and_then(SubmissionState::succeed)
			.unwrap();

		assert_eq!(state, SubmissionState::Succeeded);
	}

	#[rstest]
	fn test_predicates() {
		assert!(SubmissionState::Idle.accepts_submit());
		assert!(SubmissionState::Failed.accepts_submit());
		assert!(!SubmissionState::Submitting.accepts_submit());
		assert!(!SubmissionState::Succeeded.accepts_submit());

		assert!(SubmissionState::Submitting.locks_controls());
		assert!(!SubmissionState::Failed.locks_controls());
	}

	#[rstest]
	fn test_transition_error_message() {
		let err = SubmissionState::Submitting.begin().unwrap_err();
		assert_eq!(err.to_string(), "cannot apply Begin while Submitting");
	}
}
