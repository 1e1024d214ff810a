//! InputStreamCollection Tests
//!
//! Tests verify:
//! - Unreadable sources fail construction and name the source
//! - JSON and form bodies are decoded into the collection
//! - Empty and non-mapping bodies leave the collection empty
//! - Body size limits
//! - The collection behaves as a local collection afterwards

use std::io::Write;

use bytes::Bytes;
use getset::{BackendKind, Config, GetSetError, InputSource, InputStreamCollection, Value};
use serde_json::json;
use tempfile::{NamedTempFile, TempDir};

// =============================================================================
// Helper Functions
// =============================================================================

fn body_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn from_file(file: &NamedTempFile) -> getset::Result<InputStreamCollection> {
    let config = Config::builder().input_path(file.path()).build();
    InputStreamCollection::from_config(&config)
}

fn from_memory(body: &'static str) -> InputStreamCollection {
    let source = InputSource::Memory(Bytes::from_static(body.as_bytes()));
    InputStreamCollection::from_source(&source, 1024).unwrap()
}

// =============================================================================
// Source Tests
// =============================================================================

#[test]
fn test_unreadable_source_fails_construction() {
    let config = Config::builder()
        .input_path("This file definitely does not exist")
        .build();

    let err = InputStreamCollection::from_config(&config).unwrap_err();

    assert!(matches!(err, GetSetError::SourceUnreadable { .. }));
    assert_eq!(
        err.to_string(),
        "Could not read from input source 'This file definitely does not exist'."
    );
}

#[test]
fn test_directory_source_is_unreadable() {
    let dir = TempDir::new().unwrap();
    let config = Config::builder().input_path(dir.path()).build();

    let result = InputStreamCollection::from_config(&config);

    assert!(matches!(result, Err(GetSetError::SourceUnreadable { .. })));
}

#[test]
fn test_body_over_limit_is_rejected() {
    let file = body_file("test=value-from-raw");
    let config = Config::builder()
        .input_path(file.path())
        .max_input_bytes(4)
        .build();

    let result = InputStreamCollection::from_config(&config);

    assert!(matches!(
        result,
        Err(GetSetError::InputTooLarge { limit: 4, .. })
    ));
}

#[test]
fn test_body_at_limit_is_accepted() {
    let body = "a=1";
    let source = InputSource::Memory(Bytes::from_static(body.as_bytes()));

    let input = InputStreamCollection::from_source(&source, body.len()).unwrap();

    assert_eq!(input.get("a").unwrap(), json!("1"));
}

#[test]
fn test_memory_source_over_limit_is_rejected() {
    let source = InputSource::Memory(Bytes::from_static(b"abcdef"));
    let result = InputStreamCollection::from_source(&source, 5);
    assert!(matches!(result, Err(GetSetError::InputTooLarge { .. })));
}

#[test]
fn test_source_display() {
    assert_eq!(InputSource::Stdin.to_string(), "stdin");
    assert_eq!(InputSource::Memory(Bytes::new()).to_string(), "memory");
    assert_eq!(InputSource::File("body.json".into()).to_string(), "body.json");
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_json_parsed_correctly() {
    let file = body_file(r#"{"test": "value-from-json"}"#);
    let input = from_file(&file).unwrap();

    assert_eq!(
        Value::Object(input.get_all().unwrap()),
        json!({"test": "value-from-json"})
    );
}

#[test]
fn test_parameter_string_parsed_correctly() {
    let file = body_file("test=value-from-raw\n");
    let input = from_file(&file).unwrap();

    assert_eq!(
        Value::Object(input.get_all().unwrap()),
        json!({"test": "value-from-raw"})
    );
}

#[test]
fn test_get_and_get_all_methods_all_work() {
    let file = body_file("test=value-from-raw");
    let input = from_file(&file).unwrap();

    assert_eq!(input.count(None).unwrap(), 1);
    assert_eq!(input.get("test").unwrap(), json!("value-from-raw"));
}

#[test]
fn test_nested_json_reachable_by_dotted_key() {
    let input = from_memory(r#"{"user": {"name": "ann", "roles": ["admin", "dev"]}}"#);

    assert_eq!(input.get("user.name").unwrap(), json!("ann"));
    assert_eq!(input.get("user.roles.1").unwrap(), json!("dev"));
    assert_eq!(input.count(Some("user.roles")).unwrap(), 2);
}

#[test]
fn test_nested_form_reachable_by_dotted_key() {
    let input = from_memory("user[name]=ann&user[roles][]=admin");

    assert_eq!(input.get("user.name").unwrap(), json!("ann"));
    assert_eq!(input.get("user.roles.0").unwrap(), json!("admin"));
}

#[test]
fn test_empty_body_leaves_collection_empty() {
    let file = body_file("");
    let input = from_file(&file).unwrap();

    assert!(input.get_all().unwrap().is_empty());
}

#[test]
fn test_json_scalar_body_leaves_collection_empty() {
    let input = from_memory("42");
    assert!(input.get_all().unwrap().is_empty());
}

// =============================================================================
// Collection Behaviour Tests
// =============================================================================

#[test]
fn test_input_collection_is_local_and_mutable() {
    let mut input = from_memory(r#"{"a": 1}"#);
    assert_eq!(input.kind(), Some(BackendKind::Local));

    input.set("b.c", 2).unwrap();
    input.remove("a").unwrap();

    assert_eq!(Value::Object(input.get_all().unwrap()), json!({"b": {"c": 2}}));
}

#[test]
fn test_instances_do_not_share_data() {
    let mut first = from_memory("a=1");
    let second = from_memory("a=1");

    first.clear().unwrap();

    assert!(first.get_all().unwrap().is_empty());
    assert_eq!(second.get("a").unwrap(), json!("1"));
}

#[test]
fn test_into_inner_keeps_values() {
    let input = from_memory("a=1").into_inner();
    assert_eq!(input.get("a").unwrap(), json!("1"));
}
