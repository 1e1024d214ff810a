//! Process-wide named slots
//!
//! Maps a resource name (`_COOKIE`, `_POST`, ...) to the root mapping every
//! shared collection of that name reads and writes.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tracing::debug;

use crate::Map;

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

/// Named root mappings shared across collections
///
/// ## Concurrency:
/// - `slots`: one Mutex for all slots; held for the whole of each call,
///   including the closure passed to `with_slot`
/// - Slots are created empty on first access and never removed
#[derive(Debug, Default)]
pub struct Registry {
    slots: Mutex<HashMap<String, Map>>,
}

impl Registry {
    /// Create an empty, isolated registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process
    pub fn global() -> Arc<Registry> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Registry::new())))
    }

    /// Snapshot of the slot, initializing it if absent
    pub fn read(&self, resource: &str) -> Map {
        self.with_slot(resource, |slot| slot.clone())
    }

    /// Replace the slot wholesale
    pub fn write(&self, resource: &str, root: Map) {
        let mut slots = self.slots.lock();
        slots.insert(resource.to_string(), root);
    }

    /// Run `f` on the slot while holding the lock
    ///
    /// This is the read-modify-write primitive: nothing else can observe
    /// or change the slot until `f` returns.
    pub fn with_slot<R>(&self, resource: &str, f: impl FnOnce(&mut Map) -> R) -> R {
        let mut slots = self.slots.lock();
        if let Some(slot) = slots.get_mut(resource) {
            return f(slot);
        }

        debug!(resource, "initializing shared slot");
        f(slots.entry(resource.to_string()).or_default())
    }

    /// Whether the slot has been initialized
    pub fn contains(&self, resource: &str) -> bool {
        self.slots.lock().contains_key(resource)
    }

    /// Names of all initialized slots, sorted
    pub fn resources(&self) -> Vec<String> {
        let mut names: Vec<String> = self.slots.lock().keys().cloned().collect();
        names.sort();
        names
    }
}
