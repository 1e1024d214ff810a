//! # getset
//!
//! Dotted-path accessors over request-scoped and process-wide collections:
//! - `get("user.address.city")` style reads into nested mappings
//! - Deep `set` that creates intermediate mappings
//! - Local storage per instance, or named slots shared process-wide
//! - Request body collections decoded from JSON or form data
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │   CookieCollection / PostCollection / InputStreamCollection │
//! │              (bind a resource name or a body)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Deref
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Collection                              │
//! │        get / set / remove / has / count by dotted key        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │    store    │          │StorageBackend│
//!   │ (path ops)  │          │Local | Shared│
//!   └─────────────┘          └──────┬───────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │  Registry   │
//!                           │  (Mutex)    │
//!                           └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use getset::{Collection, Map};
//!
//! let mut data = Collection::local();
//! data.set("one.two.three", "totally").unwrap();
//! assert_eq!(data.get("one.two.three").unwrap(), "totally");
//! assert_eq!(data.count(Some("one.two")).unwrap(), 1);
//! assert_eq!(data.get_all_and_clear().unwrap().len(), 1);
//! assert_eq!(data.get_all().unwrap(), Map::new());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod path;
pub mod store;
pub mod backend;
pub mod collection;
pub mod input;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GetSetError, Result};
pub use config::Config;
pub use path::PathKey;
pub use backend::{BackendKind, Registry, StorageBackend};
pub use collection::{
    Collection, CookieCollection, DataCollection, FilesCollection, GetCollection,
    PostCollection, ServerCollection, SessionCollection,
};
pub use input::{InputSource, InputStreamCollection};

pub use serde_json::Value;

/// Root mapping of a collection, in insertion order
pub type Map = serde_json::Map<String, Value>;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of getset
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
