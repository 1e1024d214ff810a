//! Nested path operations

use serde_json::Value;

use crate::path::PathKey;
use crate::Map;

use super::list::{index_map, list_index};

/// Resolve a path to the value stored there, if every segment exists.
pub fn resolve<'v>(root: &'v Map, path: &PathKey<'_>) -> Option<&'v Value> {
    let (first, rest) = path.split_first();
    let mut node = root.get(first)?;
    for segment in rest {
        node = child(node, segment)?;
    }
    Some(node)
}

/// Get the value at `path`, or `default` if any segment is missing.
pub fn get_at(root: &Map, path: &PathKey<'_>, default: Value) -> Value {
    resolve(root, path).cloned().unwrap_or(default)
}

/// Whether every segment of `path` exists. A stored `null` is present.
pub fn has_at(root: &Map, path: &PathKey<'_>) -> bool {
    resolve(root, path).is_some()
}

/// Assign `value` at `path`, creating intermediate mappings as needed.
///
/// A non-container found where a mapping is required is overwritten with
/// an empty mapping. Existing mappings are descended into, so their other
/// keys survive.
pub fn set_at(root: &mut Map, path: &PathKey<'_>, value: Value) {
    let (first, rest) = path.split_first();
    let mut slot = root.entry(first).or_insert(Value::Null);
    for segment in rest {
        slot = entry_mut(slot, segment);
    }
    *slot = value;
}

/// Remove the value at `path` and return it.
///
/// Returns `None` and leaves `root` untouched when the path does not exist.
/// Only the final key is deleted; emptied ancestors are kept.
pub fn remove_at(root: &mut Map, path: &PathKey<'_>) -> Option<Value> {
    let (last, parents) = path.split_last();
    let Some((first, rest)) = parents.split_first() else {
        return root.shift_remove(last);
    };

    let mut parent = root.get_mut(*first)?;
    for segment in rest {
        parent = child_mut(parent, segment)?;
    }
    remove_child(parent, last)
}

/// Count the entries of the root, or of the container at `path`.
///
/// Missing paths and terminal values count as 0.
pub fn count_at(root: &Map, path: Option<&PathKey<'_>>) -> usize {
    let Some(path) = path else {
        return root.len();
    };

    match resolve(root, path) {
        Some(Value::Object(map)) => map.len(),
        Some(Value::Array(items)) => items.len(),
        _ => 0,
    }
}

// =============================================================================
// Traversal helpers
// =============================================================================

fn child<'v>(node: &'v Value, segment: &str) -> Option<&'v Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(list_index(segment)?),
        _ => None,
    }
}

fn child_mut<'v>(node: &'v mut Value, segment: &str) -> Option<&'v mut Value> {
    match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => items.get_mut(list_index(segment)?),
        _ => None,
    }
}

/// Slot for `segment` inside `node`, making `node` a container first.
fn entry_mut<'v>(node: &'v mut Value, segment: &str) -> &'v mut Value {
    // In-range index or one-past-the-end append; anything else re-keys.
    let index = match &*node {
        Value::Array(items) => list_index(segment).filter(|&i| i <= items.len()),
        _ => None,
    };
    if index.is_none() && !node.is_object() {
        rekey(node);
    }

    match (node, index) {
        (Value::Array(items), Some(index)) => {
            if index == items.len() {
                items.push(Value::Null);
            }
            &mut items[index]
        }
        (Value::Object(map), _) => map.entry(segment).or_insert(Value::Null),
        (other, _) => entry_mut(other, segment),
    }
}

/// Turn `node` into a mapping: lists keep their indices as keys, anything
/// else is dropped.
fn rekey(node: &mut Value) {
    let map = match node.take() {
        Value::Array(items) => index_map(items),
        _ => Map::new(),
    };
    *node = Value::Object(map);
}

fn remove_child(node: &mut Value, segment: &str) -> Option<Value> {
    match node {
        Value::Object(map) => map.shift_remove(segment),
        Value::Array(items) => {
            let index = list_index(segment).filter(|&i| i < items.len())?;
            if index + 1 == items.len() {
                return items.pop();
            }
            let mut map = index_map(std::mem::take(items));
            let removed = map.shift_remove(segment);
            *node = Value::Object(map);
            removed
        }
        _ => None,
    }
}
