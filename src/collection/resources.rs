//! Named collections
//!
//! Each shared collection binds one constant resource name; that name is
//! the whole contract between the collection and the registry slot.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::backend::Registry;
use crate::Map;

use super::Collection;

macro_rules! shared_collection {
    ($(#[$meta:meta])* $name:ident => $resource:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name(Collection);

        impl $name {
            /// Registry slot this collection reads and writes
            pub const RESOURCE: &'static str = $resource;

            /// Bind to the process-wide registry
            pub fn new() -> Self {
                Self::with_registry(Registry::global())
            }

            /// Bind to a specific registry
            pub fn with_registry(registry: Arc<Registry>) -> Self {
                Self(Collection::shared(Self::RESOURCE, registry))
            }

            pub fn into_inner(self) -> Collection {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Deref for $name {
            type Target = Collection;

            fn deref(&self) -> &Collection {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Collection {
                &mut self.0
            }
        }
    };
}

shared_collection!(
    /// Request cookies
    CookieCollection => "_COOKIE"
);

shared_collection!(
    /// Uploaded file metadata
    FilesCollection => "_FILES"
);

shared_collection!(
    /// Query string parameters
    GetCollection => "_GET"
);

shared_collection!(
    /// Posted form fields
    PostCollection => "_POST"
);

shared_collection!(
    /// Server and environment metadata
    ServerCollection => "_SERVER"
);

shared_collection!(
    /// Session data
    SessionCollection => "_SESSION"
);

/// Internal data local to one instance
#[derive(Debug)]
pub struct DataCollection(Collection);

impl DataCollection {
    pub fn new() -> Self {
        Self(Collection::local())
    }

    pub fn with_values(values: Map) -> Self {
        Self(Collection::with_values(values))
    }

    pub fn into_inner(self) -> Collection {
        self.0
    }
}

impl Default for DataCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for DataCollection {
    type Target = Collection;

    fn deref(&self) -> &Collection {
        &self.0
    }
}

impl DerefMut for DataCollection {
    fn deref_mut(&mut self) -> &mut Collection {
        &mut self.0
    }
}
