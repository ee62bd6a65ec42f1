// ABOUTME: In-memory key-value store backed by a concurrent hash map
// ABOUTME: Used for tests and for sessions that should not outlive the process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::sync::Arc;

use dashmap::DashMap;
use vitarva_core::errors::AppResult;

use super::KeyValueStore;

/// Process-local store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("vitarva:a", "1").unwrap();
        assert_eq!(other.get("vitarva:a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_clear_prefix_leaves_foreign_keys() {
        let store = MemoryStore::new();
        store.set("vitarva:a", "1").unwrap();
        store.set("vitarva:b", "2").unwrap();
        store.set("theme", "dark").unwrap();

        assert_eq!(store.clear_prefix("vitarva:").unwrap(), 2);
        assert_eq!(store.keys().unwrap(), vec!["theme".to_owned()]);
    }
}
