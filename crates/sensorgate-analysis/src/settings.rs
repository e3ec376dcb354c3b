//! Configuration store: flat analysis properties.
//!
//! External loaders may change properties between analysis phases; readers
//! see the latest value. The optimizer only ever reads.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sensorgate_core::types::FxHashMap;

/// Thread-safe key → value property store.
#[derive(Debug, Default)]
pub struct Settings {
    properties: RwLock<FxHashMap<String, String>>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_properties<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let settings = Self::new();
        for (key, value) in properties {
            settings.set(key, value);
        }
        settings
    }

    /// Set a property, returning the previous value. The value is trimmed;
    /// an empty value still counts as set.
    pub fn set(&self, key: impl Into<String>, value: impl AsRef<str>) -> Option<String> {
        self.write()
            .insert(key.into(), value.as_ref().trim().to_string())
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.write().remove(key)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    pub fn has(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// True iff every key is set. Vacuously true for no keys.
    pub fn has_all<I, S>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let properties = self.read();
        keys.into_iter().all(|k| properties.contains_key(k.as_ref()))
    }

    /// First key, in iteration order, that is not set.
    pub fn first_missing<I, S>(&self, keys: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let properties = self.read();
        keys.into_iter()
            .find(|k| !properties.contains_key(k.as_ref()))
            .map(|k| k.as_ref().to_string())
    }

    /// Set keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, FxHashMap<String, String>> {
        self.properties.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FxHashMap<String, String>> {
        self.properties.write().unwrap_or_else(PoisonError::into_inner)
    }
}
