//! Raw request body sources

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use bytes::Bytes;

use crate::error::{GetSetError, Result};

/// Where a request body is read from
#[derive(Debug, Clone, Default)]
pub enum InputSource {
    /// Standard input of the process
    #[default]
    Stdin,

    /// A file on disk
    File(PathBuf),

    /// A body already held in memory
    Memory(Bytes),
}

impl InputSource {
    /// Read the whole payload once, failing if it exceeds `limit` bytes
    pub fn read(&self, limit: usize) -> Result<Bytes> {
        let payload = match self {
            InputSource::Memory(bytes) => bytes.clone(),
            InputSource::Stdin => self.read_limited(io::stdin().lock(), limit)?,
            InputSource::File(path) => {
                let file = File::open(path).map_err(|e| self.unreadable(e))?;
                self.read_limited(file, limit)?
            }
        };

        if payload.len() > limit {
            return Err(GetSetError::InputTooLarge {
                source_name: self.to_string(),
                limit,
            });
        }
        Ok(payload)
    }

    fn read_limited(&self, reader: impl Read, limit: usize) -> Result<Bytes> {
        // One byte past the limit is enough to detect an oversized body.
        let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
        let mut buffer = Vec::new();
        reader
            .take(cap)
            .read_to_end(&mut buffer)
            .map_err(|e| self.unreadable(e))?;
        Ok(Bytes::from(buffer))
    }

    fn unreadable(&self, cause: io::Error) -> GetSetError {
        GetSetError::SourceUnreadable {
            source_name: self.to_string(),
            cause,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Memory(_) => f.write_str("memory"),
        }
    }
}
