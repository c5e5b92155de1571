// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use reactive_stores::Store;
use serde::{Deserialize, Serialize};

/// Current contents of the contact form's fields
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Store)]
pub struct ContactFields {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
}

/// One send of the contact form, taken from the fields at submit time
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SubmissionAttempt {
	pub name: String,
	pub email: String,
	pub subject: Option<String>,
	pub message: String,
}

impl From<ContactFields> for SubmissionAttempt {
	fn from(fields: ContactFields) -> Self {
		let subject = Some(fields.subject.trim().to_string()).filter(|subject| !subject.is_empty());
		Self {
			name: fields.name,
			email: fields.email,
			subject,
			message: fields.message,
		}
	}
}
