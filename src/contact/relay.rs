// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::attempt::SubmissionAttempt;
use super::error::ContactError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Body sent to the form relay
#[derive(Clone, Debug, Serialize)]
pub struct RelayPayload<'a> {
	pub access_key: &'a str,
	pub name: &'a str,
	pub email: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<&'a str>,
	pub message: &'a str,
}

impl<'a> RelayPayload<'a> {
	pub fn new(access_key: &'a str, attempt: &'a SubmissionAttempt) -> Self {
		Self {
			access_key,
			name: &attempt.name,
			email: &attempt.email,
			subject: attempt.subject.as_deref(),
			message: &attempt.message,
		}
	}
}

/// What the form relay answered
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RelayResponse {
	pub success: bool,
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub data: Option<Value>,
}

impl RelayResponse {
	pub fn into_outcome(self) -> Result<Option<Value>, ContactError> {
		if self.success {
			Ok(self.data)
		} else {
			let message = self
				.message
				.filter(|message| !message.is_empty())
				.unwrap_or_else(|| String::from("Submission failed"));
			Err(ContactError::RelayRejected(message))
		}
	}
}

#[cfg(feature = "ssr")]
pub use client::RelayClient;

#[cfg(feature = "ssr")]
mod client {
	use super::{ContactError, RelayPayload, RelayResponse, SubmissionAttempt};
	use reqwest::header::ACCEPT;

	/// Sends contact form submissions on to the form relay with the site's access key
	#[derive(Clone, Debug)]
	pub struct RelayClient {
		http_client: reqwest::Client,
		endpoint: String,
		access_key: String,
	}

	impl RelayClient {
		pub fn new(endpoint: String, access_key: String) -> Self {
			Self {
				http_client: reqwest::Client::new(),
				endpoint,
				access_key,
			}
		}

		pub fn endpoint(&self) -> &str {
			&self.endpoint
		}

		/// Posts the attempt to the relay. The relay reports rejections in the body, often with a non-success
		/// status, so the body is read whatever the status is.
		pub async fn submit(&self, attempt: &SubmissionAttempt) -> Result<RelayResponse, ContactError> {
			let payload = RelayPayload::new(&self.access_key, attempt);
			let response = self
				.http_client
				.post(&self.endpoint)
				.header(ACCEPT, "application/json")
				.json(&payload)
				.send()
				.await
				.map_err(|error| ContactError::TransportFailure(error.to_string()))?;

			let status = response.status();
			let body = response
				.text()
				.await
				.map_err(|error| ContactError::TransportFailure(error.to_string()))?;

			serde_json::from_str(&body).map_err(|error| {
				ContactError::TransportFailure(format!("unreadable relay response (HTTP {}): {}", status, error))
			})
		}
	}
}


#[cfg(all(test, feature = "ssr"))]
mod client_tests {
	use super::*;
	use axum::Json;
	use axum::Router;
	use axum::http::StatusCode;
	use axum::routing::post;
	use serde_json::json;
	use tokio::net::TcpListener;

	async fn serve(router: Router) -> String {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, router).await.unwrap();
		});
		format!("http://{}/submit", addr)
	}

	fn attempt() -> SubmissionAttempt {
		SubmissionAttempt {
			name: String::from("Ada"),
			email: String::from("ada@example.com"),
			subject: Some(String::from("Coaching")),
			message: String::from("Hello"),
		}
	}

	#[tokio::test]
	async fn posts_json_with_access_key() {
		let router = Router::new().route(
			"/submit",
			post(|Json(body): Json<Value>| async move {
				let accepted = body["access_key"] == "secret" && body["subject"] == "Coaching";
				Json(json!({ "success": accepted, "data": body }))
			}),
		);
		let endpoint = serve(router).await;

		let client = RelayClient::new(endpoint, String::from("secret"));
		let response = client.submit(&attempt()).await.unwrap();
		assert!(response.success);
		assert_eq!(response.data.unwrap()["email"], "ada@example.com");
	}

	#[tokio::test]
	async fn reads_rejection_from_error_status() {
		let router = Router::new().route(
			"/submit",
			post(|| async {
				(
					StatusCode::BAD_REQUEST,
					Json(json!({ "success": false, "message": "bad key" })),
				)
			}),
		);
		let endpoint = serve(router).await;

		let client = RelayClient::new(endpoint, String::from("wrong"));
		let response = client.submit(&attempt()).await.unwrap();
		assert_eq!(
			response.into_outcome(),
			Err(ContactError::RelayRejected(String::from("bad key")))
		);
	}

	#[tokio::test]
	async fn unreadable_body_is_a_transport_failure() {
		let router = Router::new().route("/submit", post(|| async { "<html>oops</html>" }));
		let endpoint = serve(router).await;

		let client = RelayClient::new(endpoint, String::from("secret"));
		let result = client.submit(&attempt()).await;
		assert!(matches!(result, Err(ContactError::TransportFailure(_))));
	}

	#[tokio::test]
	async fn unreachable_relay_is_a_transport_failure() {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		drop(listener);

		let client = RelayClient::new(format!("http://{}/submit", addr), String::from("secret"));
		let result = client.submit(&attempt()).await;
		assert!(matches!(result, Err(ContactError::TransportFailure(_))));
	}
}
