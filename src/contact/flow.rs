// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The contact form's submit flow.
//!
//! A submit is checked against the [`SubmissionGate`] and either blocked on the spot or sent to the relay. Once the
//! relay answers, the form shows a success or error message, and every message clears itself after a delay. All
//! decisions are made by [`transition`], which only returns the effects for the page to carry out.

use super::attempt::SubmissionAttempt;
use super::error::ContactError;
use super::gate::{MAX_SUBMISSIONS, SubmissionGate};
use super::relay::RelayResponse;
use super::storage::SessionStorage;
use std::time::Duration;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "✓ Message sent! I'll get back to you shortly.";
pub const FAILURE_MESSAGE: &str = "✗ Something went wrong. Please try again or email me directly.";

/// How long the "too many submissions" message stays up
pub const BLOCKED_MESSAGE_DURATION: Duration = Duration::from_secs(5);
/// How long the message after a send stays up
pub const OUTCOME_MESSAGE_DURATION: Duration = Duration::from_secs(6);

pub fn blocked_message() -> String {
	format!(
		"✗ You have reached the maximum submissions for this session ({}). Please try again later.",
		MAX_SUBMISSIONS
	)
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubmitState {
	#[default]
	Idle,
	Blocked,
	Sending,
	Succeeded,
	Failed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageKind {
	Success,
	Error,
}

impl MessageKind {
	/// Class applied to the message element
	pub fn class(&self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormMessage {
	pub kind: MessageKind,
	pub text: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GateDecision {
	Allow,
	Deny,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FlowEvent {
	Submit {
		attempt: SubmissionAttempt,
		gate: GateDecision,
	},
	RelayResolved(Result<RelayResponse, ContactError>),
	/// A scheduled clear for the message shown with this generation
	MessageExpired(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
	ShowMessage(FormMessage),
	ClearMessage,
	/// Clear the message after a delay by feeding back [`FlowEvent::MessageExpired`]
	ScheduleClear { after: Duration, generation: u64 },
	DisableSubmit { label: &'static str },
	RestoreSubmit { label: &'static str },
	SendRelay(SubmissionAttempt),
	RecordSubmission,
	ResetForm,
	LogFailure(ContactError),
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FlowState {
	pub ui: SubmitState,
	/// Bumped every time a message is shown
	pub message_generation: u64,
}

impl FlowState {
	fn showing_message(self, ui: SubmitState) -> Self {
		Self {
			ui,
			message_generation: self.message_generation.wrapping_add(1),
		}
	}
}

/// Decides the next state and the effects for one event
pub fn transition(state: &FlowState, event: FlowEvent) -> (FlowState, Vec<Effect>) {
	match (state.ui, event) {
		// The submit control is disabled while sending
		(SubmitState::Sending, FlowEvent::Submit { .. }) => (*state, Vec::new()),
		(_, FlowEvent::Submit {
			gate: GateDecision::Deny,
			..
		}) => {
			let next = state.showing_message(SubmitState::Blocked);
			let effects = vec![
				Effect::LogFailure(ContactError::RateLimited { limit: MAX_SUBMISSIONS }),
				Effect::ShowMessage(FormMessage {
					kind: MessageKind::Error,
					text: blocked_message(),
				}),
				Effect::ScheduleClear {
					after: BLOCKED_MESSAGE_DURATION,
					generation: next.message_generation,
				},
			];
			(next, effects)
		}
		(_, FlowEvent::Submit {
			attempt,
			gate: GateDecision::Allow,
		}) => {
			let next = FlowState {
				ui: SubmitState::Sending,
				..*state
			};
			let effects = vec![
				Effect::DisableSubmit { label: SENDING_LABEL },
				Effect::SendRelay(attempt),
			];
			(next, effects)
		}
		(SubmitState::Sending, FlowEvent::RelayResolved(result)) => {
			match result.and_then(RelayResponse::into_outcome) {
				Ok(_) => {
					let next = state.showing_message(SubmitState::Succeeded);
					let effects = vec![
						Effect::RecordSubmission,
						Effect::ShowMessage(FormMessage {
							kind: MessageKind::Success,
							text: String::from(SUCCESS_MESSAGE),
						}),
						Effect::ResetForm,
						Effect::RestoreSubmit { label: SUBMIT_LABEL },
						Effect::ScheduleClear {
							after: OUTCOME_MESSAGE_DURATION,
							generation: next.message_generation,
						},
					];
					(next, effects)
				}
				Err(error) => {
					let next = state.showing_message(SubmitState::Failed);
					let effects = vec![
						Effect::LogFailure(error),
						Effect::ShowMessage(FormMessage {
							kind: MessageKind::Error,
							text: String::from(FAILURE_MESSAGE),
						}),
						Effect::RestoreSubmit { label: SUBMIT_LABEL },
						Effect::ScheduleClear {
							after: OUTCOME_MESSAGE_DURATION,
							generation: next.message_generation,
						},
					];
					(next, effects)
				}
			}
		}
		(_, FlowEvent::RelayResolved(_)) => (*state, Vec::new()),
		(SubmitState::Blocked | SubmitState::Succeeded | SubmitState::Failed, FlowEvent::MessageExpired(generation))
			if generation == state.message_generation =>
		{
			let next = FlowState {
				ui: SubmitState::Idle,
				..*state
			};
			(next, vec![Effect::ClearMessage])
		}
		// The last outcome message is still up while a resend is in flight
		(SubmitState::Sending, FlowEvent::MessageExpired(generation)) if generation == state.message_generation => {
			(*state, vec![Effect::ClearMessage])
		}
		(_, FlowEvent::MessageExpired(_)) => (*state, Vec::new()),
	}
}

/// Runs the submit flow for one form, keeping the submission count in `S`
#[derive(Clone, Debug, Default)]
pub struct SubmitFlow<S> {
	state: FlowState,
	gate: SubmissionGate<S>,
}

impl<S: SessionStorage> SubmitFlow<S> {
	pub fn new(storage: S) -> Self {
		Self {
			state: FlowState::default(),
			gate: SubmissionGate::new(storage),
		}
	}

	pub fn state(&self) -> SubmitState {
		self.state.ui
	}

	pub fn gate(&self) -> &SubmissionGate<S> {
		&self.gate
	}

	pub fn submit(&mut self, attempt: SubmissionAttempt) -> Vec<Effect> {
		let gate = if self.gate.check_limit() {
			GateDecision::Allow
		} else {
			GateDecision::Deny
		};
		self.handle(FlowEvent::Submit { attempt, gate })
	}

	pub fn relay_resolved(&mut self, result: Result<RelayResponse, ContactError>) -> Vec<Effect> {
		self.handle(FlowEvent::RelayResolved(result))
	}

	pub fn message_expired(&mut self, generation: u64) -> Vec<Effect> {
		self.handle(FlowEvent::MessageExpired(generation))
	}

	/// Applies the event and carries out the effects that touch the session count, returning the rest for the
	/// page to apply in order.
	pub fn handle(&mut self, event: FlowEvent) -> Vec<Effect> {
		let (next, effects) = transition(&self.state, event);
		self.state = next;

		let mut page_effects = Vec::with_capacity(effects.len());
		for effect in effects {
			if effect != Effect::RecordSubmission {
				page_effects.push(effect);
				continue;
			}
			match self.gate.record_submission() {
				Ok(count) => tracing::debug!(count, "Recorded contact form submission"),
				Err(error) => tracing::warn!(source = ?error, "Failed to record contact form submission"),
			}
		}
		page_effects
	}
}
