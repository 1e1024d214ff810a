//! Body Decoding Tests
//!
//! Tests verify:
//! - JSON bodies decode first
//! - Non-JSON bodies fall back to form data
//! - Bracketed form names build nested mappings and lists
//! - Name mangling of dots, spaces and unclosed brackets

use getset::input::{decode_body, decode_form, MAX_JSON_DEPTH};
use getset::store::get_at;
use getset::{Map, PathKey, Value};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn decoded(body: &str) -> Value {
    Value::Object(decode_body(body.as_bytes()))
}

/// `{"a":{"a":...1}}` nested `depth` objects deep
fn nested_json(depth: usize) -> String {
    format!("{}1{}", r#"{"a":"#.repeat(depth), "}".repeat(depth))
}

// =============================================================================
// JSON Tests
// =============================================================================

#[test]
fn test_json_object() {
    assert_eq!(
        decoded(r#"{"test": "value-from-json"}"#),
        json!({"test": "value-from-json"})
    );
}

#[test]
fn test_json_nested_object_kept_as_is() {
    let body = r#"{"user": {"name": "ann", "tags": ["a", "b"]}, "n": 1.5}"#;
    assert_eq!(
        decoded(body),
        json!({"user": {"name": "ann", "tags": ["a", "b"]}, "n": 1.5})
    );
}

#[test]
fn test_json_surrounding_whitespace() {
    assert_eq!(decoded(" \n{\"a\": 1}\n "), json!({"a": 1}));
}

#[test]
fn test_json_list_is_keyed_by_index() {
    assert_eq!(decoded(r#"["x", "y"]"#), json!({"0": "x", "1": "y"}));
}

#[test]
fn test_json_scalars_decode_to_empty() {
    for body in ["5", "\"text\"", "null", "true", "[]", "{}"] {
        assert_eq!(decode_body(body.as_bytes()), Map::new(), "body {body}");
    }
}

#[test]
fn test_json_key_order_preserved() {
    let map = decode_body(br#"{"z": 1, "a": 2, "m": 3}"#);
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_json_deeply_nested_object() {
    let map = decode_body(nested_json(200).as_bytes());
    let key = vec!["a"; 200].join(".");

    assert_eq!(get_at(&map, &PathKey::parse(&key), Value::Null), json!(1));
}

#[test]
fn test_json_nesting_up_to_max_depth() {
    let map = decode_body(nested_json(MAX_JSON_DEPTH).as_bytes());
    assert!(map.contains_key("a"));
}

#[test]
fn test_json_nesting_past_max_depth_falls_back_to_form() {
    let body = nested_json(MAX_JSON_DEPTH + 1);
    let map = decode_body(body.as_bytes());

    assert_eq!(map.len(), 1);
    assert!(!map.contains_key("a"));
}

#[test]
fn test_json_brackets_inside_strings_not_counted() {
    let text = "[{".repeat(MAX_JSON_DEPTH);
    let body = json!({"s": text}).to_string();

    assert_eq!(decoded(&body), json!({"s": text}));
}

// =============================================================================
// Form Fallback Tests
// =============================================================================

#[test]
fn test_form_simple_pair() {
    assert_eq!(decoded("test=value-from-raw"), json!({"test": "value-from-raw"}));
}

#[test]
fn test_form_body_is_trimmed() {
    assert_eq!(decoded("  test=value-from-raw\n"), json!({"test": "value-from-raw"}));
}

#[test]
fn test_form_multiple_pairs_last_wins() {
    assert_eq!(decoded("a=1&b=2&a=3"), json!({"a": "3", "b": "2"}));
}

#[test]
fn test_form_percent_and_plus_decoding() {
    assert_eq!(
        decoded("greeting=hello+world&sym=%26%3D"),
        json!({"greeting": "hello world", "sym": "&="})
    );
}

#[test]
fn test_form_key_without_value() {
    assert_eq!(decoded("flag&x="), json!({"flag": "", "x": ""}));
}

#[test]
fn test_broken_json_falls_back_to_form() {
    assert_eq!(decoded("{broken"), json!({"{broken": ""}));
}

// =============================================================================
// Bracket Nesting Tests
// =============================================================================

#[test]
fn test_form_nested_brackets() {
    assert_eq!(
        decoded("user[name]=ann&user[address][city]=Oslo"),
        json!({"user": {"name": "ann", "address": {"city": "Oslo"}}})
    );
}

#[test]
fn test_form_append_brackets_build_list() {
    assert_eq!(
        decoded("user[name]=ann&user[tags][]=a&user[tags][]=b"),
        json!({"user": {"name": "ann", "tags": ["a", "b"]}})
    );
}

#[test]
fn test_form_explicit_sequential_indices_build_list() {
    assert_eq!(decoded("a[0]=x&a[1]=y"), json!({"a": ["x", "y"]}));
}

#[test]
fn test_form_sparse_indices_stay_a_mapping() {
    assert_eq!(decoded("a[1]=y"), json!({"a": {"1": "y"}}));
}

#[test]
fn test_form_append_after_explicit_index() {
    assert_eq!(decoded("a[5]=x&a[]=y"), json!({"a": {"5": "x", "6": "y"}}));
}

#[test]
fn test_form_nested_overwrites_scalar() {
    assert_eq!(decoded("a=1&a[b]=2"), json!({"a": {"b": "2"}}));
}

#[test]
fn test_form_trailing_text_after_brackets_ignored() {
    assert_eq!(decoded("a[b]junk=1"), json!({"a": {"b": "1"}}));
}

// =============================================================================
// Name Mangling Tests
// =============================================================================

#[test]
fn test_form_dots_and_spaces_become_underscores() {
    assert_eq!(
        decoded("first.name=a&last+name=b"),
        json!({"first_name": "a", "last_name": "b"})
    );
}

#[test]
fn test_form_dots_inside_brackets_kept() {
    assert_eq!(decoded("a.b[c.d]=1"), json!({"a_b": {"c.d": "1"}}));
}

#[test]
fn test_form_unclosed_bracket_becomes_underscore() {
    assert_eq!(decoded("a[b=1"), json!({"a_b": "1"}));
}

#[test]
fn test_form_leading_spaces_dropped() {
    assert_eq!(decoded("%20%20a=1"), json!({"a": "1"}));
}

#[test]
fn test_form_empty_names_skipped() {
    assert_eq!(decoded("=1&[x]=2&ok=3"), json!({"ok": "3"}));
}

#[test]
fn test_decode_form_directly() {
    let map = decode_form(b"{\"a\":1}");
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("{\"a\":1}"));
}
