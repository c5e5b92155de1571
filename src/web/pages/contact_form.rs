// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::contact::attempt::{ContactFields, ContactFieldsStoreFields, SubmissionAttempt};
use crate::contact::error::ContactError;
use crate::contact::flow::{Effect, FormMessage, MessageKind, SUBMIT_LABEL, SubmitFlow};
use crate::contact::relay::RelayResponse;
use crate::contact::storage::BrowserSessionStorage;
use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

/// Everything the form's effects act on
#[derive(Clone, Copy)]
struct FormHandles {
	flow: StoredValue<SubmitFlow<BrowserSessionStorage>>,
	fields: Store<ContactFields>,
	message: RwSignal<Option<FormMessage>>,
	submit_label: RwSignal<&'static str>,
	submit_disabled: RwSignal<bool>,
}

impl FormHandles {
	fn new() -> Self {
		Self {
			flow: StoredValue::new(SubmitFlow::new(BrowserSessionStorage)),
			fields: Store::new(ContactFields::default()),
			message: RwSignal::new(None),
			submit_label: RwSignal::new(SUBMIT_LABEL),
			submit_disabled: RwSignal::new(false),
		}
	}

	fn run(self, step: impl FnOnce(&mut SubmitFlow<BrowserSessionStorage>) -> Vec<Effect>) {
		let effects = self.flow.try_update_value(step).unwrap_or_default();
		self.apply(effects);
	}

	fn apply(self, effects: Vec<Effect>) {
		for effect in effects {
			match effect {
				Effect::ShowMessage(message) => self.message.set(Some(message)),
				Effect::ClearMessage => self.message.set(None),
				Effect::ScheduleClear { after, generation } => {
					set_timeout(move || self.run(|flow| flow.message_expired(generation)), after);
				}
				Effect::DisableSubmit { label } => {
					self.submit_label.set(label);
					self.submit_disabled.set(true);
				}
				Effect::RestoreSubmit { label } => {
					self.submit_label.set(label);
					self.submit_disabled.set(false);
				}
				Effect::SendRelay(attempt) => {
					spawn_local(async move {
						let result = submit_contact(attempt)
							.await
							.map_err(|error| ContactError::TransportFailure(error.to_string()));
						self.run(|flow| flow.relay_resolved(result));
					});
				}
				// Carried out by the flow before effects reach the page
				Effect::RecordSubmission => (),
				Effect::ResetForm => self.fields.set(ContactFields::default()),
				Effect::LogFailure(failure) => error!("Form submission error: {}", failure),
			}
		}
	}
}

#[component]
pub fn ContactForm() -> impl IntoView {
	let handles = FormHandles::new();
	let fields = handles.fields;
	let message = handles.message;

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();
		let attempt = SubmissionAttempt::from(fields.get_untracked());
		handles.run(|flow| flow.submit(attempt));
	};

	let message_is = move |kind: MessageKind| {
		message.with(|message| message.as_ref().is_some_and(|message| message.kind == kind))
	};

	view! {
		<form id="contactForm" class="contact-form" on:submit=form_submit>
			<div class="form-group">
				<label for="name">"Name"</label>
				<input
					type="text"
					id="name"
					name="name"
					required
					prop:value=move || fields.name().get()
					on:input=move |event| fields.name().set(event_target_value(&event))
				/>
			</div>
			<div class="form-group">
				<label for="email">"Email"</label>
				<input
					type="email"
					id="email"
					name="email"
					required
					prop:value=move || fields.email().get()
					on:input=move |event| fields.email().set(event_target_value(&event))
				/>
			</div>
			<div class="form-group">
				<label for="subject">"Subject (optional)"</label>
				<input
					type="text"
					id="subject"
					name="subject"
					prop:value=move || fields.subject().get()
					on:input=move |event| fields.subject().set(event_target_value(&event))
				/>
			</div>
			<div class="form-group">
				<label for="message">"Message"</label>
				<textarea
					id="message"
					name="message"
					rows="6"
					required
					prop:value=move || fields.message().get()
					on:input=move |event| fields.message().set(event_target_value(&event))
				></textarea>
			</div>
			<button
				type="submit"
				class="submit-button"
				disabled=move || handles.submit_disabled.get()
			>
				{move || handles.submit_label.get()}
			</button>
			<div
				id="formMessage"
				class="form-message"
				class:success=move || message_is(MessageKind::Success)
				class:error=move || message_is(MessageKind::Error)
				role="status"
			>
				{move || message.with(|message| message.as_ref().map(|message| message.text.clone()))}
			</div>
		</form>
	}
}

/// Passes a contact form submission on to the form relay with the site's access key
#[server]
pub async fn submit_contact(attempt: SubmissionAttempt) -> Result<RelayResponse, ServerFnError> {
	use crate::web::state::AppState;

	let state: AppState = expect_context();
	let response = state.relay_client.submit(&attempt).await;

	match &response {
		Ok(response) if response.success => tracing::info!("Relayed a contact form submission"),
		Ok(response) => {
			tracing::warn!(reason = ?response.message, "The form relay rejected a contact form submission")
		}
		Err(error) => tracing::error!(source = ?error, "Failed to relay a contact form submission"),
	}

	Ok(response?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::contact::flow::{FAILURE_MESSAGE, SENDING_LABEL};

	fn filled_fields() -> ContactFields {
		ContactFields {
			name: String::from("Ada"),
			email: String::from("ada@example.com"),
			subject: String::from("Coaching"),
			message: String::from("Hello"),
		}
	}

	#[test]
	fn submit_control_follows_disable_and_restore() {
		let owner = Owner::new();
		owner.set();
		let handles = FormHandles::new();

		handles.apply(vec![Effect::DisableSubmit { label: SENDING_LABEL }]);
		assert_eq!(handles.submit_label.get_untracked(), SENDING_LABEL);
		assert!(handles.submit_disabled.get_untracked());

		handles.apply(vec![Effect::RestoreSubmit { label: SUBMIT_LABEL }]);
		assert_eq!(handles.submit_label.get_untracked(), SUBMIT_LABEL);
		assert!(!handles.submit_disabled.get_untracked());
	}

	#[test]
	fn reset_form_empties_every_field() {
		let owner = Owner::new();
		owner.set();
		let handles = FormHandles::new();
		handles.fields.set(filled_fields());

		handles.apply(vec![Effect::ResetForm]);
		assert_eq!(handles.fields.get_untracked(), ContactFields::default());
	}

	#[test]
	fn messages_are_shown_and_cleared() {
		let owner = Owner::new();
		owner.set();
		let handles = FormHandles::new();
		let failure = FormMessage {
			kind: MessageKind::Error,
			text: String::from(FAILURE_MESSAGE),
		};

		handles.apply(vec![Effect::ShowMessage(failure.clone()), Effect::RecordSubmission]);
		assert_eq!(handles.message.get_untracked(), Some(failure));
		assert_eq!(handles.fields.get_untracked(), ContactFields::default());

		handles.apply(vec![Effect::ClearMessage]);
		assert_eq!(handles.message.get_untracked(), None);
	}
}
