//! Input Module
//!
//! A local collection filled from a raw request body.
//!
//! ## Construction
//! 1. Read the configured source once (failure names the source)
//! 2. Empty body: the collection stays empty
//! 3. Otherwise decode it (JSON, else form data)
//! 4. A non-empty result replaces the collection's contents

mod decode;
mod source;

use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::collection::Collection;
use crate::config::Config;
use crate::error::Result;

pub use decode::{decode_body, decode_form, MAX_JSON_DEPTH};
pub use source::InputSource;

/// Collection over the decoded request body
#[derive(Debug)]
pub struct InputStreamCollection(Collection);

impl InputStreamCollection {
    /// Read the body from the default source (stdin)
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_source(&config.input_source, config.max_input_bytes)
    }

    /// Read and decode `source`, allowing at most `limit` bytes
    pub fn from_source(source: &InputSource, limit: usize) -> Result<Self> {
        let mut collection = Collection::local();

        let body = source.read(limit)?;
        debug!(source = %source, bytes = body.len(), "read request body");

        if !body.is_empty() {
            let values = decode_body(&body);
            if !values.is_empty() {
                collection.set_all(values)?;
            }
        }

        Ok(Self(collection))
    }

    pub fn into_inner(self) -> Collection {
        self.0
    }
}

impl Deref for InputStreamCollection {
    type Target = Collection;

    fn deref(&self) -> &Collection {
        &self.0
    }
}

impl DerefMut for InputStreamCollection {
    fn deref_mut(&mut self) -> &mut Collection {
        &mut self.0
    }
}
