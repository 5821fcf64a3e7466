#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Key-value persistence seam.
//!
//! Contacts, complaints, and settings live in the device's opaque async
//! key-value storage. [`KeyValueStore`] abstracts that store so the
//! registries can run against [`MemoryStore`] in tests and
//! [`JsonFileStore`] in the CLI, with the real device backend slotting
//! in behind the same trait.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tokio::sync::RwLock;

/// Default path for the CLI's persisted data.
pub const DEFAULT_STORE_PATH: &str = "data/sakhi.json";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// The seam
// ---------------------------------------------------------------------------

/// Async string key-value store, the shape of the device storage the
/// registries persist into.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Loads and deserializes the JSON record stored under `key`, or `None`
/// when the key is absent.
///
/// # Errors
///
/// Returns [`StoreError`] if the backend fails or the stored JSON does
/// not match `T`.
pub async fn load_record<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serializes `record` to JSON and stores it under `key`.
///
/// # Errors
///
/// Returns [`StoreError`] if serialization or the backend fails.
pub async fn save_record<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    record: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(record)?;
    store.set(key, &raw).await
}

// ---------------------------------------------------------------------------
// Backends
// ---------------------------------------------------------------------------

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// File-backed store holding every key in one JSON object.
///
/// Suited to the CLI's small data volumes: contents are loaded once at
/// open and every mutation rewrites the whole file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating parent directories and loading
    /// any existing contents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or
    /// parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }
}

fn persist(path: &Path, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, raw)?;
    Ok(())
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        persist(&self.path, &entries)
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        persist(&self.path, &entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        name: String,
        count: u32,
    }

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));

        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);

        // Removing an absent key is fine.
        store.remove("k").await.unwrap();
    }

    #[tokio::test]
    async fn typed_records_round_trip() {
        let store = MemoryStore::new();
        let profile = Profile {
            name: "Asha".to_string(),
            count: 3,
        };

        save_record(&store, "profile", &profile).await.unwrap();
        let loaded: Option<Profile> = load_record(&store, "profile").await.unwrap();
        assert_eq!(loaded, Some(profile));

        let missing: Option<Profile> = load_record(&store, "absent").await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let store = MemoryStore::new();
        store.set("profile", "not json").await.unwrap();
        let result: Result<Option<Profile>, StoreError> = load_record(&store, "profile").await;
        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[tokio::test]
    async fn json_file_store_survives_reopen() {
        let tmp = std::env::temp_dir().join("sakhi_store_test");
        let _ = std::fs::remove_dir_all(&tmp);
        let path = tmp.join("data.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("a", "1").await.unwrap();
            store.set("b", "2").await.unwrap();
            store.remove("a").await.unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a").await.unwrap(), None);
        assert_eq!(reopened.get("b").await.unwrap(), Some("2".to_string()));

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
