//! Collection Module
//!
//! The public accessor: dotted-key reads and writes over one backend.
//!
//! ## Data Flow
//! ```text
//!   set("one.two", v)
//!        │
//!        ▼
//!   PathKey::parse ──► StorageBackend::update ──► store::set_at(root, ..)
//!                         (locks shared slot)        (mutates in place)
//! ```
//!
//! Every mutating call is a single read-modify-write of the root mapping.
//! Reads of absent keys, removals of absent keys and counts of absent
//! paths are never errors; the only failure is an unbound backend.

mod resources;

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::backend::{BackendKind, Registry, StorageBackend};
use crate::error::Result;
use crate::path::PathKey;
use crate::store;
use crate::Map;

pub use resources::{
    CookieCollection, DataCollection, FilesCollection, GetCollection, PostCollection,
    ServerCollection, SessionCollection,
};

/// Dotted-path accessor over a nested root mapping
#[derive(Debug, Default)]
pub struct Collection {
    backend: StorageBackend,
}

impl Collection {
    // =========================================================================
    // Construction
    // =========================================================================

    /// An empty collection with its own local storage
    pub fn local() -> Self {
        Self::from_backend(StorageBackend::local())
    }

    /// A local collection starting with `values`
    pub fn with_values(values: Map) -> Self {
        Self::from_backend(StorageBackend::Local(values))
    }

    /// A collection over the `resource` slot of `registry`
    pub fn shared(resource: impl Into<String>, registry: Arc<Registry>) -> Self {
        Self::from_backend(StorageBackend::shared(resource, registry))
    }

    /// A collection over the `resource` slot of the process-wide registry
    pub fn global(resource: impl Into<String>) -> Self {
        Self::shared(resource, Registry::global())
    }

    /// A collection with no storage; every operation fails
    pub fn unbound() -> Self {
        Self::from_backend(StorageBackend::Unbound)
    }

    pub fn from_backend(backend: StorageBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &StorageBackend {
        &self.backend
    }

    pub fn kind(&self) -> Option<BackendKind> {
        self.backend.kind()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The whole root mapping
    pub fn get_all(&self) -> Result<Map> {
        self.backend.read_root()
    }

    /// The whole root mapping, leaving the collection empty
    pub fn get_all_and_clear(&mut self) -> Result<Map> {
        trace!("get_all_and_clear");
        self.backend.update(std::mem::take)
    }

    /// Value at `key`, or `null` if absent
    pub fn get(&self, key: &str) -> Result<Value> {
        self.get_or(key, Value::Null)
    }

    /// Value at `key`, or `default` if absent
    pub fn get_or(&self, key: &str, default: Value) -> Result<Value> {
        trace!(key, "get");
        let path = PathKey::parse(key);
        self.backend.read_with(|root| store::get_at(root, &path, default))
    }

    /// Values at each key in order, `null` for the absent ones
    pub fn get_multiple<K: AsRef<str>>(&self, keys: &[K]) -> Result<Vec<Value>> {
        self.backend.read_with(|root| {
            keys.iter()
                .map(|key| store::get_at(root, &PathKey::parse(key.as_ref()), Value::Null))
                .collect()
        })
    }

    /// Whether `key` exists; a stored `null` counts as present
    pub fn has(&self, key: &str) -> Result<bool> {
        let path = PathKey::parse(key);
        self.backend.read_with(|root| store::has_at(root, &path))
    }

    /// Entry count of the root (`None`) or of the container at `key`
    pub fn count(&self, key: Option<&str>) -> Result<usize> {
        let path = key.map(PathKey::parse);
        self.backend.read_with(|root| store::count_at(root, path.as_ref()))
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Assign `value` at `key`, creating intermediate mappings
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        trace!(key, "set");
        let path = PathKey::parse(key);
        let value = value.into();
        self.backend.update(|root| store::set_at(root, &path, value))
    }

    /// `set` each entry in order, keeping unrelated keys
    pub fn set_many(&mut self, values: Map) -> Result<()> {
        trace!(count = values.len(), "set_many");
        self.backend.update(|root| {
            for (key, value) in values {
                store::set_at(root, &PathKey::parse(&key), value);
            }
        })
    }

    /// Replace the whole root mapping
    pub fn set_all(&mut self, values: Map) -> Result<()> {
        debug!(
            resource = self.backend.resource(),
            count = values.len(),
            "replacing collection"
        );
        self.backend.write_root(values)
    }

    /// Delete `key`; a missing key is left alone
    pub fn remove(&mut self, key: &str) -> Result<()> {
        trace!(key, "remove");
        let path = PathKey::parse(key);
        self.backend.update(|root| {
            store::remove_at(root, &path);
        })
    }

    /// Remove and return the value at `key`, or `null` if absent
    pub fn get_and_remove(&mut self, key: &str) -> Result<Value> {
        self.get_and_remove_or(key, Value::Null)
    }

    /// Remove and return the value at `key`, or `default` if absent
    pub fn get_and_remove_or(&mut self, key: &str, default: Value) -> Result<Value> {
        trace!(key, "get_and_remove");
        let path = PathKey::parse(key);
        self.backend.update(|root| store::remove_at(root, &path).unwrap_or(default))
    }

    /// Drop every key
    pub fn clear(&mut self) -> Result<()> {
        self.set_all(Map::new())
    }
}
