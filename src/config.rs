//! Configuration for getset
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::input::InputSource;

/// Default request body limit (8 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: usize = 8 * 1024 * 1024;

/// Configuration for request body collections
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Input Configuration
    // -------------------------------------------------------------------------
    /// Where the raw request body is read from
    pub input_source: InputSource,

    /// Largest body accepted before construction fails (in bytes)
    pub max_input_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_source: InputSource::Stdin,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the body source
    pub fn input_source(mut self, source: InputSource) -> Self {
        self.config.input_source = source;
        self
    }

    /// Read the body from a file
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_source = InputSource::File(path.into());
        self
    }

    /// Set the body size limit (in bytes)
    pub fn max_input_bytes(mut self, limit: usize) -> Self {
        self.config.max_input_bytes = limit;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
