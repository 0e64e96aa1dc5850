// X3dPrefs - app/prefs_file.rs
//
// Write-through JSON persistence for the preference registry.
//
// Design principles:
// - Every change is saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good file.
// - A file that cannot be parsed, or has a different schema version, is
//   renamed aside with a `.bad` suffix and the store starts empty. The
//   user's old values stay recoverable and the next save does not clobber
//   them.
// - Save failures are logged and remembered for the status bar; the
//   in-memory view stays authoritative for the rest of the session.

use crate::core::store::{MemoryStore, Namespaces, PreferenceStore};
use crate::util::constants::{PREFS_BAD_SUFFIX, PREFS_FILE_VERSION};
use crate::util::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// =============================================================================
// On-disk document
// =============================================================================

/// Complete persisted preference snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefsDocument {
    /// Schema version; must equal `PREFS_FILE_VERSION` to be accepted.
    pub version: u32,

    /// When the document was last written.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,

    /// Values grouped by namespace, then key.
    #[serde(default)]
    pub modules: Namespaces,
}

impl PrefsDocument {
    pub fn new(modules: Namespaces) -> Self {
        Self {
            version: PREFS_FILE_VERSION,
            saved_at: Some(Utc::now()),
            modules,
        }
    }
}

// =============================================================================
// I/O helpers
// =============================================================================

/// Save `doc` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed.
pub fn save(doc: &PrefsDocument, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(doc).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|source| StoreError::Io {
        path: tmp.clone(),
        operation: "write",
        source,
    })?;

    std::fs::rename(&tmp, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp);
        StoreError::Io {
            path: path.to_path_buf(),
            operation: "rename",
            source,
        }
    })?;

    tracing::debug!(path = %path.display(), "Preference file saved");
    Ok(())
}

/// Load and validate a `PrefsDocument` from `path`.
///
/// A missing file is `Ok(None)`, the normal first-run case.
pub fn load(path: &Path) -> Result<Option<PrefsDocument>, StoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                operation: "read",
                source,
            })
        }
    };

    let doc: PrefsDocument =
        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    if doc.version != PREFS_FILE_VERSION {
        return Err(StoreError::VersionMismatch {
            path: path.to_path_buf(),
            found: doc.version,
            expected: PREFS_FILE_VERSION,
        });
    }

    Ok(Some(doc))
}

/// Where an unreadable preference file is moved.
pub fn bad_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(PREFS_BAD_SUFFIX);
    path.with_file_name(name)
}

// =============================================================================
// File store
// =============================================================================

/// A `PreferenceStore` persisted to one JSON file after every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    memory: MemoryStore,
    last_error: Option<String>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file is absent or bad.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut last_error = None;

        let memory = match load(&path) {
            Ok(Some(doc)) => {
                let count: usize = doc.modules.values().map(|m| m.len()).sum();
                tracing::info!(path = %path.display(), values = count, "Preference file loaded");
                MemoryStore::from_namespaces(doc.modules)
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "No preference file yet; starting empty");
                MemoryStore::new()
            }
            Err(e) => {
                let aside = bad_path(&path);
                tracing::warn!(
                    path = %path.display(),
                    moved_to = %aside.display(),
                    error = %e,
                    "Preference file unusable; starting with defaults"
                );
                if let Err(rename_err) = std::fs::rename(&path, &aside) {
                    tracing::warn!(error = %rename_err, "Could not set aside bad preference file");
                }
                last_error = Some(e.to_string());
                MemoryStore::new()
            }
        };

        Self {
            path,
            memory,
            last_error,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Most recent load or save problem, for display.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn persist(&mut self) {
        let doc = PrefsDocument::new(self.memory.namespaces().clone());
        match save(&doc, &self.path) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save preferences");
                self.last_error = Some(e.to_string());
            }
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, namespace: &str, key: &str) -> Option<String> {
        self.memory.get(namespace, key)
    }

    fn put(&mut self, namespace: &str, key: &str, value: String) {
        if self.memory.get(namespace, key).as_deref() == Some(value.as_str()) {
            return;
        }
        self.memory.put(namespace, key, value);
        self.persist();
    }

    fn remove(&mut self, namespace: &str, key: &str) -> bool {
        let removed = self.memory.remove(namespace, key);
        if removed {
            self.persist();
        }
        removed
    }

    fn remove_all(&mut self, namespace: &str, keys: &[&str]) -> usize {
        let removed = self.memory.remove_all(namespace, keys);
        if removed > 0 {
            self.persist();
        }
        removed
    }

    fn keys(&self, namespace: &str) -> Vec<String> {
        self.memory.keys(namespace)
    }
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NS: &str = "org/web3d/x3d/options";

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        let mut store = FileStore::open(&path);
        store.put(NS, "CADFILTER_KEY_VERSION", "4.0".to_string());
        store.put(NS, "AUTOVALIDATE", "false".to_string());
        assert!(store.last_error().is_none());

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(NS, "CADFILTER_KEY_VERSION").as_deref(), Some("4.0"));
        assert_eq!(reopened.keys(NS), vec!["AUTOVALIDATE", "CADFILTER_KEY_VERSION"]);
    }

    #[test]
    fn test_document_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = FileStore::open(&path);
        store.put(NS, "LAUNCH_INTERVAL", "2".to_string());

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert!(raw["saved_at"].is_string());
        assert_eq!(raw["modules"][NS]["LAUNCH_INTERVAL"], "2");
        assert!(!path.with_extension("json.tmp").exists(), "temp file renamed away");
    }

    #[test]
    fn test_malformed_file_is_set_aside() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path);

        assert!(store.keys(NS).is_empty());
        assert!(store.last_error().is_some());
        assert!(!path.exists());
        assert_eq!(
            std::fs::read_to_string(bad_path(&path)).unwrap(),
            "{ not json"
        );
    }

    #[test]
    fn test_version_mismatch_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"version": 99, "modules": {}}"#).unwrap();

        assert!(matches!(
            load(&path),
            Err(StoreError::VersionMismatch { found: 99, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("absent.json")).unwrap().is_none());
    }

    #[test]
    fn test_remove_all_persists_once_and_reports_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        let mut store = FileStore::open(&path);
        store.put(NS, "A", "1".to_string());
        store.put(NS, "B", "2".to_string());

        assert_eq!(store.remove_all(NS, &["A", "B", "C"]), 2);

        let reopened = FileStore::open(&path);
        assert!(reopened.keys(NS).is_empty());
    }

    #[test]
    fn test_bad_path_appends_suffix() {
        assert_eq!(
            bad_path(Path::new("/x/preferences.json")),
            PathBuf::from("/x/preferences.json.bad")
        );
    }
}
