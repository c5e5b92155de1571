// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::error::StorageError;
use std::cell::RefCell;
use std::collections::HashMap;

/// String key/value storage scoped to a single browsing session
pub trait SessionStorage {
	fn get_item(&self, key: &str) -> Option<String>;
	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's `window.sessionStorage`. Looked up on every access, so it's safe to construct during server
/// rendering; it only reads as empty there.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

impl BrowserSessionStorage {
	fn storage() -> Option<web_sys::Storage> {
		web_sys::window()?.session_storage().ok().flatten()
	}
}

impl SessionStorage for BrowserSessionStorage {
	fn get_item(&self, key: &str) -> Option<String> {
		Self::storage()?.get_item(key).ok().flatten()
	}

	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		let Some(storage) = Self::storage() else {
			return Err(StorageError::Unavailable);
		};
		storage.set_item(key, value).map_err(|_| StorageError::WriteRefused {
			key: key.to_string(),
		})
	}
}

/// In-process storage, standing in for the browser's session storage off the page
#[derive(Debug, Default)]
pub struct MemoryStorage {
	items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_item(key: &str, value: &str) -> Self {
		let storage = Self::new();
		storage.items.borrow_mut().insert(key.to_string(), value.to_string());
		storage
	}
}

impl SessionStorage for MemoryStorage {
	fn get_item(&self, key: &str) -> Option<String> {
		self.items.borrow().get(key).cloned()
	}

	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.items.borrow_mut().insert(key.to_string(), value.to_string());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn memory_storage_round_trips_values() {
		let storage = MemoryStorage::new();
		assert_eq!(storage.get_item("key"), None);
		storage.set_item("key", "value").unwrap();
		assert_eq!(storage.get_item("key").as_deref(), Some("value"));
		storage.set_item("key", "other").unwrap();
		assert_eq!(storage.get_item("key").as_deref(), Some("other"));
	}
}
