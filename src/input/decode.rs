//! Request body decoding
//!
//! A body is decoded as JSON first. Only when that fails is it treated as
//! `application/x-www-form-urlencoded` data, with bracketed field names
//! building nested structures:
//!
//! ```text
//! user[name]=ann&user[tags][]=a&user[tags][]=b
//!   => {"user": {"name": "ann", "tags": ["a", "b"]}}
//! ```

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::form_urlencoded;

use crate::store::{index_map, list_index};
use crate::Map;

/// Characters stripped from both ends of a form body
const FORM_TRIM: &[u8] = b" \t\n\r\0\x0B";

/// Deepest array/object nesting accepted in a JSON body
pub const MAX_JSON_DEPTH: usize = 512;

/// Decode a raw body into a root mapping
///
/// JSON objects are taken as-is and JSON lists are keyed by index. Any
/// other JSON value decodes to an empty mapping. Bodies that are not JSON
/// are decoded as form data.
pub fn decode_body(body: &[u8]) -> Map {
    match parse_json(body) {
        Ok(value) => {
            debug!("decoded body as JSON");
            match value {
                Value::Object(map) => map,
                Value::Array(items) => index_map(items),
                _ => Map::new(),
            }
        }
        Err(e) => {
            debug!(error = %e, "body is not JSON, decoding as form data");
            decode_form(trim(body))
        }
    }
}

/// Decode `key=value&key2=value2` form data
///
/// - `a[b]=1` nests, `a[]=1` appends at the next free index
/// - `.` and space in the top-level name become `_`
/// - an unclosed first `[` becomes `_` and the rest of the name is literal
/// - mappings keyed exactly `0..n` come out as lists
pub fn decode_form(body: &[u8]) -> Map {
    let mut root = Map::new();
    for (name, value) in form_urlencoded::parse(body) {
        let Some(segments) = field_path(&name) else {
            continue;
        };
        insert_field(&mut root, &segments, Value::String(value.into_owned()));
    }

    root.values_mut().for_each(listify);
    root
}

/// Parse a JSON document nested at most `MAX_JSON_DEPTH` levels deep
fn parse_json(body: &[u8]) -> serde_json::Result<Value> {
    let depth = nesting_depth(body);
    if depth > MAX_JSON_DEPTH {
        return Err(serde_json::Error::custom(format!(
            "nesting depth {depth} exceeds {MAX_JSON_DEPTH}"
        )));
    }

    let mut de = serde_json::Deserializer::from_slice(body);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// Deepest bracket nesting outside of string literals
fn nesting_depth(body: &[u8]) -> usize {
    let (mut depth, mut deepest) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);
    for &b in body {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

fn trim(body: &[u8]) -> &[u8] {
    let start = body
        .iter()
        .position(|b| !FORM_TRIM.contains(b))
        .unwrap_or(body.len());
    let end = body
        .iter()
        .rposition(|b| !FORM_TRIM.contains(b))
        .map_or(start, |i| i + 1);
    &body[start..end]
}

/// Split a field name into its base name and bracketed segments
fn field_path(name: &str) -> Option<Vec<String>> {
    let name = name.trim_start_matches(' ');
    let (base, mut rest) = match name.find('[') {
        Some(pos) => name.split_at(pos),
        None => (name, ""),
    };
    if base.is_empty() {
        return None;
    }

    if !rest.is_empty() && !rest.contains(']') {
        return Some(vec![format!("{}_{}", mangle(base), &rest[1..])]);
    }

    let mut segments = vec![mangle(base)];
    while let Some(open) = rest.strip_prefix('[') {
        let Some(close) = open.find(']') else {
            break;
        };
        segments.push(open[..close].to_string());
        rest = &open[close + 1..];
    }
    Some(segments)
}

fn mangle(base: &str) -> String {
    base.replace([' ', '.'], "_")
}

fn insert_field(map: &mut Map, segments: &[String], value: Value) {
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };
    let key = if segment.is_empty() {
        next_index(map).to_string()
    } else {
        segment.clone()
    };

    if rest.is_empty() {
        map.insert(key, value);
        return;
    }

    match map.entry(key).or_insert_with(|| Value::Object(Map::new())) {
        Value::Object(child) => insert_field(child, rest, value),
        other => {
            let mut child = Map::new();
            insert_field(&mut child, rest, value);
            *other = Value::Object(child);
        }
    }
}

/// One past the highest index key, or 0
fn next_index(map: &Map) -> usize {
    map.keys()
        .filter_map(|key| list_index(key))
        .max()
        .map_or(0, |max| max + 1)
}

fn listify(value: &mut Value) {
    if let Value::Object(map) = value {
        map.values_mut().for_each(listify);

        let sequential = !map.is_empty()
            && map
                .keys()
                .enumerate()
                .all(|(i, key)| list_index(key) == Some(i));
        if sequential {
            let items = std::mem::take(map).into_iter().map(|(_, v)| v).collect();
            *value = Value::Array(items);
        }
    }
}
