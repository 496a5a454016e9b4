//! Session Store - Per-session key-value storage
//!
//! The storage seam between the group cache and whatever hosts the session.
//! Hosting frameworks own creation and expiry of the underlying storage; this
//! trait only models reads and writes scoped to one user's session.

use serde_json::Value;
use std::collections::HashMap;

/// Per-session mapping from string key to an arbitrary stored value
pub trait SessionStore: Send + Sync {
    /// Read a stored value
    fn get(&self, key: &str) -> Option<&Value>;

    /// Write a value, replacing any previous entry under the key
    fn insert(&mut self, key: &str, value: Value);

    /// Remove a stored value
    fn remove(&mut self, key: &str) -> Option<Value>;

    /// Whether a value is stored under the key
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory session store for tests and simple deployments
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, Value>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    fn insert(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemorySessionStore::new();
        assert!(store.is_empty());
        assert!(!store.contains_key("UserGroups"));

        store.insert("UserGroups", json!(["ADMIN", "USER"]));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("UserGroups"), Some(&json!(["ADMIN", "USER"])));

        // Insert replaces the previous entry
        store.insert("UserGroups", json!([]));
        assert_eq!(store.get("UserGroups"), Some(&json!([])));

        assert_eq!(store.remove("UserGroups"), Some(json!([])));
        assert!(store.get("UserGroups").is_none());
    }
}
