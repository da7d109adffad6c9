//! Durable blob storage for persisted collections.
//!
//! The stores serialize whole collections to JSON and write them through a
//! [`BlobStore`]; there is no event log and no schema version. A reader that
//! cannot make sense of a document starts fresh instead of failing.

use directories::BaseDirs;
use log::{debug, info};
use mindful_rs_config::StorageConfig;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors returned by blob stores.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a document failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Named-document storage used by the stores.
pub trait BlobStore: Send + Sync {
    /// Read the document stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replace the document stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Blob store keeping one JSON document per key on disk.
pub struct FileBlobStore {
    /// Root directory for stored documents.
    root: PathBuf,
    /// Serialize write access to document files.
    write_lock: Mutex<()>,
}

impl FileBlobStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        info!("initialized blob store (root={})", root.display());
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// Build the document path for a key.
    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.document_path(key);
        if !path.exists() {
            debug!("no stored document (key={})", key);
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        let path = self.document_path(key);
        debug!("writing document (key={}, bytes={})", key, value.len());
        fs::write(path, value)?;
        Ok(())
    }
}

/// Resolve the on-disk storage root from config and platform defaults.
pub fn resolve_storage_root(config: &StorageConfig) -> Result<PathBuf, StorageError> {
    let cwd = std::env::current_dir()?;
    if let Some(path) = &config.path {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            debug!("using absolute storage root: {}", path.display());
            return Ok(path);
        }
        debug!(
            "resolving storage root relative to cwd: {}",
            cwd.join(&path).display()
        );
        return Ok(cwd.join(path));
    }

    if let Some(home) = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()) {
        return Ok(home.join(".mindful").join("store"));
    }

    Ok(cwd.join(".mindful").join("store"))
}

#[cfg(test)]
mod tests {
    use super::{BlobStore, FileBlobStore, resolve_storage_root};
    use mindful_rs_config::StorageConfig;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn file_store_round_trips_documents() {
        let temp = tempdir().expect("tempdir");
        let store = FileBlobStore::new(temp.path()).expect("store");

        assert_eq!(store.get("missing").expect("get"), None);

        store.set("doc", r#"[{"a":1}]"#).expect("set");
        assert_eq!(store.get("doc").expect("get"), Some(r#"[{"a":1}]"#.to_string()));

        store.set("doc", "[]").expect("overwrite");
        assert_eq!(store.get("doc").expect("get"), Some("[]".to_string()));
    }

    #[test]
    fn resolve_storage_root_respects_absolute_and_relative_paths() {
        let temp = tempdir().expect("tempdir");
        let absolute = temp.path().join("store");
        let config = StorageConfig {
            path: Some(absolute.to_string_lossy().to_string()),
        };
        assert_eq!(resolve_storage_root(&config).expect("absolute"), absolute);

        let config = StorageConfig {
            path: Some("tmp/store".to_string()),
        };
        let cwd = std::env::current_dir().expect("cwd");
        assert_eq!(
            resolve_storage_root(&config).expect("relative"),
            cwd.join("tmp/store")
        );
    }
}
