// X3dPrefs - core/store.rs
//
// Namespaced string key/value storage behind the preference registry.
//
// The registry never touches files itself. It talks to a
// `PreferenceStore`, which is either the in-memory store below (tests and
// throwaway sessions) or the write-through JSON file store in
// `app::prefs_file`.

use std::collections::BTreeMap;

/// Flat string storage, scoped by a module namespace.
///
/// Writes are synchronous: once `put` or `remove` returns, a subsequent
/// `get` observes the change. Implementations never fail outward; a
/// persistence problem is logged and the in-memory view stays authoritative.
pub trait PreferenceStore: std::fmt::Debug {
    fn get(&self, namespace: &str, key: &str) -> Option<String>;

    fn put(&mut self, namespace: &str, key: &str, value: String);

    /// Delete `key`. Returns true if a value was present.
    fn remove(&mut self, namespace: &str, key: &str) -> bool;

    /// Delete several keys as one operation.
    ///
    /// File-backed stores override this to persist once instead of once per
    /// key. Returns how many keys held a value.
    fn remove_all(&mut self, namespace: &str, keys: &[&str]) -> usize {
        keys.iter().filter(|k| self.remove(namespace, k)).count()
    }

    /// Keys currently holding a value, in sorted order.
    fn keys(&self, namespace: &str) -> Vec<String>;
}

/// Values grouped by namespace, then key.
pub type Namespaces = BTreeMap<String, BTreeMap<String, String>>;

/// Volatile store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    modules: Namespaces,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot, e.g. one read from disk.
    pub fn from_namespaces(modules: Namespaces) -> Self {
        Self { modules }
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.modules
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, namespace: &str, key: &str) -> Option<String> {
        self.modules.get(namespace)?.get(key).cloned()
    }

    fn put(&mut self, namespace: &str, key: &str, value: String) {
        self.modules
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    fn remove(&mut self, namespace: &str, key: &str) -> bool {
        let Some(module) = self.modules.get_mut(namespace) else {
            return false;
        };
        let removed = module.remove(key).is_some();
        if module.is_empty() {
            self.modules.remove(namespace);
        }
        removed
    }

    fn keys(&self, namespace: &str) -> Vec<String> {
        self.modules
            .get(namespace)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "org/web3d/x3d/options";

    #[test]
    fn test_put_then_get_returns_value() {
        let mut store = MemoryStore::new();
        store.put(NS, "AUTOVALIDATE", "false".to_string());
        assert_eq!(store.get(NS, "AUTOVALIDATE").as_deref(), Some("false"));
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let mut store = MemoryStore::new();
        store.put(NS, "KEY", "a".to_string());
        store.put("org/other", "KEY", "b".to_string());
        assert_eq!(store.get(NS, "KEY").as_deref(), Some("a"));
        assert_eq!(store.get("org/other", "KEY").as_deref(), Some("b"));
    }

    #[test]
    fn test_remove_reports_presence_and_prunes_empty_namespace() {
        let mut store = MemoryStore::new();
        store.put(NS, "KEY", "a".to_string());
        assert!(store.remove(NS, "KEY"));
        assert!(!store.remove(NS, "KEY"));
        assert!(store.namespaces().is_empty());
    }

    #[test]
    fn test_remove_all_counts_only_present_keys() {
        let mut store = MemoryStore::new();
        store.put(NS, "A", "1".to_string());
        store.put(NS, "B", "2".to_string());
        assert_eq!(store.remove_all(NS, &["A", "B", "C"]), 2);
        assert!(store.keys(NS).is_empty());
    }
}
