//! crates/eztechpal_portal/src/adapters/file_store.rs
//!
//! This module contains the file-backed storage adapter, the concrete
//! implementation of the `KeyValueStore` port from the `core` crate. Each
//! key maps to one file under the data directory, mirroring the per-key
//! layout of browser local storage.

use eztechpal_core::ports::{KeyValueStore, StoreError, StoreResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A storage adapter that implements the `KeyValueStore` port on top of
/// plain files.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens the store, creating the data directory if it does not exist.
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            StoreError::Unavailable(format!("cannot create {}: {e}", root.display()))
        })?;
        Ok(Self { root })
    }

    /// Keys double as file names, so only `[A-Za-z0-9_]` is accepted.
    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(StoreError::Unavailable(format!(
                "invalid store key {key:?}"
            )));
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Unavailable(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        fs::write(&path, value).map_err(|e| {
            StoreError::Unavailable(format!("cannot write {}: {e}", path.display()))
        })
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Unavailable(format!(
                "cannot remove {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn scratch_dir(label: &str) -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "eztechpal-file-store-{}-{label}-{n}",
            std::process::id()
        ))
    }

    #[test]
    fn missing_key_reads_as_none() {
        let store = FileStore::open(scratch_dir("missing")).unwrap();
        assert_eq!(store.get("eztech_services").unwrap(), None);
    }

    #[test]
    fn values_survive_reopening_the_store() {
        let dir = scratch_dir("reopen");
        let store = FileStore::open(&dir).unwrap();
        store.set("eztech_services", "[]").unwrap();
        drop(store);

        let reopened = FileStore::open(&dir).unwrap();
        assert_eq!(
            reopened.get("eztech_services").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let store = FileStore::open(scratch_dir("remove")).unwrap();
        store.set("eztech_current_user", "{}").unwrap();
        store.remove("eztech_current_user").unwrap();
        store.remove("eztech_current_user").unwrap();
        assert_eq!(store.get("eztech_current_user").unwrap(), None);
    }

    #[test]
    fn keys_with_path_separators_are_rejected() {
        let store = FileStore::open(scratch_dir("keys")).unwrap();
        assert!(store.get("../escape").is_err());
        assert!(store.set("a/b", "x").is_err());
    }
}
