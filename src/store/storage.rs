//! Key-value storage abstraction.
//!
//! The roster persists as JSON payloads under string keys. The backend is
//! injected behind the [`Storage`] trait so the scheduler and the roster
//! facade stay storage-agnostic; [`MemoryStorage`] is the built-in
//! backend.
//!
//! Typed access goes through the free helpers: [`get_item`] / [`set_item`]
//! for serde round-trips, [`initialize`] for seed-if-absent, and
//! [`reconcile`] for replacing a stored collection whose shape no longer
//! matches the seed (the lazy schema-drift check the roster runs on open).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Storage and roster failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected an operation.
    #[error("storage backend error for key '{key}': {message}")]
    Backend {
        /// Affected key.
        key: String,
        /// Backend-specific description.
        message: String,
    },
    /// A value could not be serialized to JSON.
    #[error("failed to encode value for key '{key}'")]
    Encode {
        /// Affected key.
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// A stored payload could not be deserialized.
    #[error("failed to decode value for key '{key}'")]
    Decode {
        /// Affected key.
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// A roster entity lookup failed.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// Entity kind ("presenter", "table").
        entity: &'static str,
        /// Requested ID.
        id: String,
    },
}

/// An injected key-value backend holding JSON payloads.
pub trait Storage {
    /// Reads the payload stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous payload.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the payload under `key`. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Removes every stored payload.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Process-local storage backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        Ok(())
    }
}

/// Reads and decodes the value under `key`, if present.
pub fn get_item<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match storage.read(key)? {
        None => Ok(None),
        Some(payload) => serde_json::from_str(&payload)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.to_string(),
                source,
            }),
    }
}

/// Encodes and stores `value` under `key`.
pub fn set_item<T: Serialize>(
    storage: &mut dyn Storage,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let payload = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.write(key, &payload)
}

/// Stores `seed` under `key` only if the key is absent.
///
/// Returns `true` when the seed was written.
pub fn initialize<T: Serialize>(
    storage: &mut dyn Storage,
    key: &str,
    seed: &T,
) -> Result<bool, StoreError> {
    if storage.read(key)?.is_some() {
        return Ok(false);
    }
    set_item(storage, key, seed)?;
    Ok(true)
}

/// Replaces the collection under `key` when its shape drifted from `seed`.
///
/// A stored collection is replaced when it no longer decodes (schema
/// change) or when its row count differs from the seed's (mock-data
/// change). Returns `true` when the seed was written.
pub fn reconcile<T: Serialize + DeserializeOwned>(
    storage: &mut dyn Storage,
    key: &str,
    seed: &[T],
) -> Result<bool, StoreError> {
    let stored: Option<Vec<T>> = match get_item(storage, key) {
        Ok(v) => v,
        Err(StoreError::Decode { .. }) => None,
        Err(other) => return Err(other),
    };

    let stale = match stored {
        None => true,
        Some(rows) => rows.len() != seed.len(),
    };

    if stale {
        log::debug!("reconciling stale collection under '{key}'");
        set_item(storage, key, &seed)?;
    }
    Ok(stale)
}
