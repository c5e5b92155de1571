// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Ways a contact form submission can end without the message being delivered
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ContactError {
	#[error("the session has used all {limit} contact form submissions")]
	RateLimited { limit: u32 },
	#[error("the form relay rejected the submission: {0}")]
	RelayRejected(String),
	#[error("couldn't reach the form relay: {0}")]
	TransportFailure(String),
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StorageError {
	#[error("session storage is not available")]
	Unavailable,
	#[error("session storage refused to store `{key}`")]
	WriteRefused { key: String },
}
