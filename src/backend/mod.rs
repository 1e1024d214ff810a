//! Backend Module
//!
//! Decides where a collection's root mapping lives.
//!
//! ## Variants
//! ```text
//!   Collection ──► StorageBackend
//!                    ├── Local(Map)         owned by the collection
//!                    ├── Shared { .. } ───► Registry["_COOKIE"]  (process-wide)
//!                    └── Unbound            every call fails
//! ```
//!
//! The variant is fixed when the collection is built. An unbound backend
//! does not fail at construction, only on first use, and never reads or
//! writes any state.

mod registry;

use std::sync::Arc;

use tracing::warn;

use crate::error::{GetSetError, Result};
use crate::Map;

pub use registry::Registry;

/// Which storage a backend resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Local,
    Shared,
}

/// Storage for one collection's root mapping
#[derive(Debug, Default)]
pub enum StorageBackend {
    /// Owned by the collection; invisible elsewhere
    Local(Map),

    /// A named slot in a (usually process-wide) registry
    Shared {
        resource: String,
        registry: Arc<Registry>,
    },

    /// No storage configured
    #[default]
    Unbound,
}

impl StorageBackend {
    pub fn local() -> Self {
        StorageBackend::Local(Map::new())
    }

    pub fn shared(resource: impl Into<String>, registry: Arc<Registry>) -> Self {
        StorageBackend::Shared {
            resource: resource.into(),
            registry,
        }
    }

    /// The resolved variant, or `None` for an unbound backend
    pub fn kind(&self) -> Option<BackendKind> {
        match self {
            StorageBackend::Local(_) => Some(BackendKind::Local),
            StorageBackend::Shared { .. } => Some(BackendKind::Shared),
            StorageBackend::Unbound => None,
        }
    }

    /// Resource name of a shared backend
    pub fn resource(&self) -> Option<&str> {
        match self {
            StorageBackend::Shared { resource, .. } => Some(resource),
            _ => None,
        }
    }

    /// Copy of the current root mapping
    pub fn read_root(&self) -> Result<Map> {
        self.read_with(Map::clone)
    }

    /// Replace the root mapping wholesale
    pub fn write_root(&mut self, root: Map) -> Result<()> {
        match self {
            StorageBackend::Local(local) => {
                *local = root;
                Ok(())
            }
            StorageBackend::Shared { resource, registry } => {
                registry.write(resource, root);
                Ok(())
            }
            StorageBackend::Unbound => Err(Self::unbound()),
        }
    }

    /// Borrow the root mapping for the duration of `f`
    pub fn read_with<R>(&self, f: impl FnOnce(&Map) -> R) -> Result<R> {
        match self {
            StorageBackend::Local(local) => Ok(f(local)),
            StorageBackend::Shared { resource, registry } => {
                Ok(registry.with_slot(resource, |slot| f(slot)))
            }
            StorageBackend::Unbound => Err(Self::unbound()),
        }
    }

    /// Read-modify-write the root mapping as one step
    ///
    /// For a shared backend the slot stays locked until `f` returns, so
    /// concurrent collections on the same resource never interleave.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Map) -> R) -> Result<R> {
        match self {
            StorageBackend::Local(local) => Ok(f(local)),
            StorageBackend::Shared { resource, registry } => Ok(registry.with_slot(resource, f)),
            StorageBackend::Unbound => Err(Self::unbound()),
        }
    }

    fn unbound() -> GetSetError {
        warn!("collection used without a storage backend");
        GetSetError::unbound()
    }
}
