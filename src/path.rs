//! Dotted key parsing
//!
//! A key such as `one.two.three` addresses a value three mappings deep.
//! Segments are taken literally: no trimming, no escaping of `.`, and empty
//! segments are kept (`""` is a single empty segment, `a..b` has three).

use std::fmt;

/// Separator between path segments
pub const SEPARATOR: char = '.';

/// A parsed dotted key. Always holds at least one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathKey<'a> {
    segments: Vec<&'a str>,
}

impl<'a> PathKey<'a> {
    /// Split a dotted key into its segments, in order.
    pub fn parse(key: &'a str) -> Self {
        Self {
            segments: key.split(SEPARATOR).collect(),
        }
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Number of segments (never zero)
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true: parsing yields at least one segment
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the first segment and the remaining ones.
    pub fn split_first(&self) -> (&'a str, &[&'a str]) {
        match self.segments.split_first() {
            Some((first, rest)) => (*first, rest),
            None => ("", &[]),
        }
    }

    /// Split into the final segment and its ancestors.
    pub fn split_last(&self) -> (&'a str, &[&'a str]) {
        match self.segments.split_last() {
            Some((last, parents)) => (*last, parents),
            None => ("", &[]),
        }
    }
}

impl fmt::Display for PathKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
