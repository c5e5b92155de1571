// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::error::StorageError;
use super::storage::SessionStorage;
use serde_json::Value;

/// Successful submissions allowed per browsing session
pub const MAX_SUBMISSIONS: u32 = 2;

/// Session storage key holding the number of successful submissions
pub const SUBMISSION_KEY: &str = "contactFormSubmissions";

/// Limits how many times the contact form can be successfully sent in one session
#[derive(Clone, Debug, Default)]
pub struct SubmissionGate<S> {
	storage: S,
}

impl<S: SessionStorage> SubmissionGate<S> {
	pub fn new(storage: S) -> Self {
		Self { storage }
	}

	pub fn storage(&self) -> &S {
		&self.storage
	}

	/// The number of successful submissions so far. Anything missing or unreadable counts as none so a corrupted
	/// entry can't lock someone out.
	pub fn submission_count(&self) -> u32 {
		self.storage
			.get_item(SUBMISSION_KEY)
			.and_then(|raw| parse_count(&raw))
			.unwrap_or(0)
	}

	/// Whether another submission may be sent
	pub fn check_limit(&self) -> bool {
		self.submission_count() < MAX_SUBMISSIONS
	}

	/// Counts one successful submission, returning the new count
	pub fn record_submission(&self) -> Result<u32, StorageError> {
		let count = self.submission_count().saturating_add(1);
		self.storage.set_item(SUBMISSION_KEY, &count.to_string())?;
		Ok(count)
	}
}

/// Stored counts are JSON numbers. Fractions round down and anything too large for a `u32` saturates, so a stored
/// value at or over the limit always blocks; negative numbers read as no submissions.
fn parse_count(raw: &str) -> Option<u32> {
	match serde_json::from_str::<Value>(raw.trim()).ok()? {
		Value::Number(number) => {
			let count = number.as_f64().filter(|count| count.is_finite())?;
			// `as` saturates at both ends
			Some(count.max(0.0) as u32)
		}
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::contact::storage::MemoryStorage;

	#[test]
	fn allows_submissions_below_limit() {
		let gate = SubmissionGate::new(MemoryStorage::new());
		assert!(gate.check_limit());
		gate.record_submission().unwrap();
		assert!(gate.check_limit());
		gate.record_submission().unwrap();
		assert!(!gate.check_limit());
		assert_eq!(gate.submission_count(), 2);
	}

	#[test]
	fn stays_blocked_past_limit() {
		let gate = SubmissionGate::new(MemoryStorage::with_item(SUBMISSION_KEY, "5"));
		assert!(!gate.check_limit());
	}

	#[test]
	fn check_limit_has_no_side_effects() {
		let gate = SubmissionGate::new(MemoryStorage::with_item(SUBMISSION_KEY, "1"));
		for _ in 0..5 {
			assert!(gate.check_limit());
		}
		assert_eq!(gate.storage().get_item(SUBMISSION_KEY).as_deref(), Some("1"));
	}

	#[test]
	fn record_submission_increments_stored_count() {
		let gate = SubmissionGate::new(MemoryStorage::new());
		assert_eq!(gate.record_submission(), Ok(1));
		assert_eq!(gate.record_submission(), Ok(2));
		assert_eq!(gate.storage().get_item(SUBMISSION_KEY).as_deref(), Some("2"));
	}

	#[test]
	fn unreadable_counts_fail_open() {
		for raw in ["", "abc", "-1", "-0.5", "null", "\"1\"", "{}"] {
			let gate = SubmissionGate::new(MemoryStorage::with_item(SUBMISSION_KEY, raw));
			assert_eq!(gate.submission_count(), 0, "stored value {raw:?}");
			assert!(gate.check_limit());
			assert_eq!(gate.record_submission(), Ok(1));
		}
	}

	#[test]
	fn numeric_counts_over_limit_stay_blocked() {
		for raw in ["3", "2.5", "1e10", "4294967296", "18446744073709551616"] {
			let gate = SubmissionGate::new(MemoryStorage::with_item(SUBMISSION_KEY, raw));
			assert!(gate.submission_count() >= MAX_SUBMISSIONS, "stored value {raw:?}");
			assert!(!gate.check_limit(), "stored value {raw:?}");
		}
	}

	#[test]
	fn fractions_below_limit_round_down() {
		let gate = SubmissionGate::new(MemoryStorage::with_item(SUBMISSION_KEY, "1.5"));
		assert_eq!(gate.submission_count(), 1);
		assert!(gate.check_limit());
		assert_eq!(gate.record_submission(), Ok(2));
		assert!(!gate.check_limit());
	}

	#[test]
	fn saturated_count_does_not_overflow() {
		let gate = SubmissionGate::new(MemoryStorage::with_item(SUBMISSION_KEY, "1e10"));
		assert_eq!(gate.submission_count(), u32::MAX);
		assert_eq!(gate.record_submission(), Ok(u32::MAX));
	}

	#[test]
	fn whole_floats_are_read_as_counts() {
		let gate = SubmissionGate::new(MemoryStorage::with_item(SUBMISSION_KEY, "2.0"));
		assert_eq!(gate.submission_count(), 2);
		assert!(!gate.check_limit());
	}
}
