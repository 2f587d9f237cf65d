//! Best-effort per-browser preference storage.
//!
//! The rendering layer supplies the actual backend (local storage); widgets
//! only see `get`/`set`. Writes are fire-and-forget with no durability
//! contract, and a missing or mistyped value always falls back to a
//! hardcoded default.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value shapes the preference store can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Minimal key-value surface the widgets program against.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<PrefValue>;
    fn set(&mut self, key: &str, value: PrefValue);
}

/// In-memory store, used in tests and as the no-persistence fallback.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, PrefValue>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }
}

/// Read a bool preference (e.g. the dark-mode flag), falling back on a
/// missing or mistyped value.
pub fn bool_pref(store: &dyn PrefStore, key: &str, default: bool) -> bool {
    match store.get(key) {
        Some(PrefValue::Bool(value)) => value,
        _ => default,
    }
}

/// Read an integer preference, falling back on a missing or mistyped value.
pub fn int_pref(store: &dyn PrefStore, key: &str, default: i64) -> i64 {
    match store.get(key) {
        Some(PrefValue::Int(value)) => value,
        _ => default,
    }
}

/// Persistent click counter backing the apply-page buttons.
#[derive(Debug, Clone)]
pub struct ClickCounter {
    key: String,
    count: i64,
}

impl ClickCounter {
    /// Load the counter for a button id, starting at zero when the stored
    /// value is missing, negative, or the wrong shape.
    pub fn load(store: &dyn PrefStore, id: &str) -> Self {
        let key = format!("clicks_{id}");
        let count = int_pref(store, &key, 0).max(0);
        Self { key, count }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Record a click and write the new count through.
    pub fn click(&mut self, store: &mut dyn PrefStore) -> i64 {
        self.count += 1;
        store.set(&self.key, PrefValue::Int(self.count));
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_reads_fall_back_on_wrong_shape() {
        let mut store = MemoryPrefs::new();
        store.set("dark_mode", PrefValue::Text("yes".to_string()));

        assert!(!bool_pref(&store, "dark_mode", false));
        assert_eq!(int_pref(&store, "missing", 42), 42);

        store.set("dark_mode", PrefValue::Bool(true));
        assert!(bool_pref(&store, "dark_mode", false));
    }

    #[test]
    fn test_click_counter_round_trip() {
        let mut store = MemoryPrefs::new();

        let mut counter = ClickCounter::load(&store, "officer_form");
        assert_eq!(counter.count(), 0);
        counter.click(&mut store);
        counter.click(&mut store);

        // A freshly loaded counter sees the persisted value.
        let reloaded = ClickCounter::load(&store, "officer_form");
        assert_eq!(reloaded.count(), 2);
    }

    #[test]
    fn test_corrupt_counter_resets_to_zero() {
        let mut store = MemoryPrefs::new();
        store.set("clicks_form", PrefValue::Int(-5));
        assert_eq!(ClickCounter::load(&store, "form").count(), 0);

        store.set("clicks_form", PrefValue::Text("nan".to_string()));
        assert_eq!(ClickCounter::load(&store, "form").count(), 0);
    }
}
