// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory config store fake for testing without filesystem I/O.

use hedit_app_core::config::{ConfigError, ConfigStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory implementation of [`ConfigStore`] for testing.
///
/// Clones share state, so a test can keep one handle for inspection while a
/// `ConfigService` owns another.
///
/// # Example
///
/// ```
/// use hedit_dry_tests::InMemoryConfigStore;
/// use hedit_app_core::config::ConfigService;
///
/// let store = InMemoryConfigStore::new();
/// let service = ConfigService::new(store.clone());
///
/// service.save("prefs", &serde_json::json!({"omit_empty": false})).unwrap();
/// assert_eq!(store.save_count(), 1);
/// assert!(store.contains_key("prefs"));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    data: HashMap<String, Vec<u8>>,
    load_count: usize,
    save_count: usize,
    fail_on_load: bool,
    fail_on_save: bool,
}

impl InMemoryConfigStore {
    /// Create a new empty in-memory config store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Configure the store to fail on load operations.
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_on_load = fail;
    }

    /// Configure the store to fail on save operations.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.lock().fail_on_save = fail;
    }

    /// Number of `load_raw` calls, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().load_count
    }

    /// Number of `save_raw` calls, failed ones included.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    /// Check if a key exists in the store.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().data.contains_key(key)
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut inner = self.lock();
        inner.load_count += 1;
        if inner.fail_on_load {
            return Err(ConfigError::Other("simulated load failure".into()));
        }
        inner.data.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut inner = self.lock();
        inner.save_count += 1;
        if inner.fail_on_save {
            return Err(ConfigError::Other("simulated save failure".into()));
        }
        inner.data.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn round_trip_save_load() {
        let store = InMemoryConfigStore::new();
        store.save_raw("test", b"hello").unwrap();
        assert_eq!(store.load_raw("test").unwrap(), b"hello");
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn load_missing_key_returns_not_found() {
        let store = InMemoryConfigStore::new();
        assert!(matches!(store.load_raw("missing"), Err(ConfigError::NotFound)));
    }

    #[test]
    fn failed_save_counts_but_stores_nothing() {
        let store = InMemoryConfigStore::new();
        store.set_fail_on_save(true);
        assert!(matches!(
            store.save_raw("key", b"value"),
            Err(ConfigError::Other(_))
        ));
        assert_eq!(store.save_count(), 1);
        assert!(!store.contains_key("key"));
    }

    #[test]
    fn clone_shares_state() {
        let a = InMemoryConfigStore::new();
        let b = a.clone();
        a.save_raw("shared", b"v").unwrap();
        assert_eq!(b.load_raw("shared").unwrap(), b"v");
        b.set_fail_on_load(true);
        assert!(a.load_raw("shared").is_err());
        assert_eq!(a.load_count(), 2);
    }
}
