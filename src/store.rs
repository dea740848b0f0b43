//! Preference storage.
//!
//! The controller only ever needs string get/set by key, so browser
//! `localStorage` and the in-memory store used by tests share one trait.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::error::StoreError;

/// Synchronous key-value store scoped to the page origin.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read a preference, logging and swallowing store failures.
///
/// A broken store is indistinguishable from an empty one to callers.
pub fn get_preference<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to read preference {}: {}", key, e);
            None
        }
    }
}

/// Persist a preference. Returns whether the write succeeded.
pub fn set_preference<S: PreferenceStore + ?Sized>(store: &mut S, key: &str, value: &str) -> bool {
    info!("Setting preference: {} = {}", key, value);
    match store.set(key, value) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save preference {}: {}", key, e);
            false
        }
    }
}

/// `HashMap`-backed store. Lives as long as the value, like a single page load.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn test_memory_store_get_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::with_value("theme", "dark");
        store.set("theme", "contrast").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("contrast"));
    }

    #[test]
    fn test_get_preference_swallows_errors() {
        assert_eq!(get_preference(&BrokenStore, "theme"), None);
    }

    #[test]
    fn test_set_preference_reports_failure() {
        let mut store = BrokenStore;
        assert!(!set_preference(&mut store, "theme", "dark"));

        let mut store = MemoryStore::new();
        assert!(set_preference(&mut store, "theme", "dark"));
    }
}
