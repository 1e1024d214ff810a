//! List addressing helpers

use serde_json::Value;

use crate::Map;

/// Parse a segment as a canonical list index.
///
/// `"0"` and `"12"` are indices; `"01"`, `"+1"` and `"-1"` are plain keys.
pub(crate) fn list_index(segment: &str) -> Option<usize> {
    let canonical = segment == "0" || (!segment.starts_with('0') && !segment.is_empty());
    if !canonical || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Re-key a list into a mapping of `"0"`, `"1"`, ... in order.
pub(crate) fn index_map(items: Vec<Value>) -> Map {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| (i.to_string(), item))
        .collect()
}
