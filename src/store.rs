//! In-memory key-value store
//!
//! One coarse lock over the whole map; every operation holds it for its full
//! duration. Keys are binary-safe (any bulk-string payload is a valid key).

use std::collections::HashMap;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::protocol::TypedValue;

/// Concurrency-safe mapping from keys to typed values
///
/// Constructed once at startup and shared into every connection handler via
/// `Arc`; never held as ambient global state.
#[derive(Default)]
pub struct KeyValueStore {
    entries: Mutex<HashMap<Bytes, TypedValue>>,
}

impl KeyValueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a key, replacing any previous value wholesale
    pub fn set(&self, key: Bytes, value: TypedValue) {
        self.entries.lock().insert(key, value);
    }

    /// Fetch the value for a key; `None` means absent, which is a normal
    /// outcome, not an error
    pub fn get(&self, key: &[u8]) -> Option<TypedValue> {
        self.entries.lock().get(key).cloned()
    }

    /// Remove a key; removing an absent key is a no-op
    pub fn delete(&self, key: &[u8]) {
        self.entries.lock().remove(key);
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
