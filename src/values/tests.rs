//! Tests for values parsing, decoding, and precedence merging.

use super::*;
use tempfile::TempDir;

fn encode(text: &str) -> String {
    BASE64.encode(text)
}

// ============================================================================
// YAML parsing
// ============================================================================

#[test]
fn from_yaml_parses_flat_mapping() {
    let values = Values::from_yaml("region: west\nreplicas: \"3\"\n").unwrap();
    assert_eq!(values.get("region"), Some("west"));
    assert_eq!(values.get("replicas"), Some("3"));
    assert_eq!(values.len(), 2);
}

#[test]
fn from_yaml_coerces_scalars_to_strings() {
    let values = Values::from_yaml("count: 3\nenabled: true\nempty: null\n").unwrap();
    assert_eq!(values.get("count"), Some("3"));
    assert_eq!(values.get("enabled"), Some("true"));
    assert_eq!(values.get("empty"), Some(""));
}

#[test]
fn from_yaml_empty_document_is_valid() {
    let values = Values::from_yaml("").unwrap();
    assert!(values.is_empty());
}

#[test]
fn from_yaml_rejects_non_mapping_document() {
    let result = Values::from_yaml("- a\n- b\n");
    assert!(matches!(result, Err(RenderError::Parse(_))));
    let err = Values::from_yaml("- a\n- b\n").unwrap_err();
    assert!(err.to_string().contains("sequence"));
}

#[test]
fn from_yaml_rejects_empty_key() {
    let result = Values::from_yaml("\"\": value\n");
    assert!(matches!(result, Err(RenderError::Parse(_))));
}

#[test]
fn from_yaml_rejects_nested_values() {
    let result = Values::from_yaml("outer:\n  inner: value\n");
    let err = result.unwrap_err();
    assert!(matches!(err, RenderError::Parse(_)));
    assert!(err.to_string().contains("outer"));
}

#[test]
fn from_yaml_rejects_non_string_keys() {
    let result = Values::from_yaml("1: one\n");
    assert!(matches!(result, Err(RenderError::Parse(_))));
}

// ============================================================================
// File loading
// ============================================================================

#[test]
fn from_file_reads_values_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("values.yaml");
    std::fs::write(&path, "region: west\n").unwrap();

    let values = Values::from_file(&path).unwrap();
    assert_eq!(values.get("region"), Some("west"));
}

#[test]
fn from_file_empty_file_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("values.yaml");
    std::fs::write(&path, "").unwrap();

    let values = Values::from_file(&path).unwrap();
    assert!(values.is_empty());
}

#[test]
fn from_file_unreadable_path_is_source_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.yaml");

    let err = Values::from_file(&path).unwrap_err();
    assert!(matches!(err, RenderError::SourceRead { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn from_file_malformed_content_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("values.yaml");
    std::fs::write(&path, "region: [unclosed\n").unwrap();

    let err = Values::from_file(&path).unwrap_err();
    assert!(matches!(err, RenderError::Parse(_)));
}

// ============================================================================
// Base64 decoding
// ============================================================================

#[test]
fn from_base64_decodes_values_document() {
    let values = Values::from_base64(&encode("region: east\n")).unwrap();
    assert_eq!(values.get("region"), Some("east"));
}

#[test]
fn from_base64_invalid_encoding_is_decode_error() {
    let err = Values::from_base64("not!!valid@@base64").unwrap_err();
    assert!(matches!(err, RenderError::Decode(_)));
}

#[test]
fn from_base64_never_yields_silently_empty_mapping() {
    // A garbage payload must surface as an error, not an empty result.
    assert!(Values::from_base64("%%%%").is_err());
}

#[test]
fn from_base64_non_utf8_content_is_decode_error() {
    let payload = BASE64.encode([0xff, 0xfe, 0x00, 0x01]);
    let err = Values::from_base64(&payload).unwrap_err();
    assert!(matches!(err, RenderError::Decode(_)));
}

#[test]
fn from_base64_invalid_document_shape_is_decode_error() {
    let err = Values::from_base64(&encode("- not\n- a\n- mapping\n")).unwrap_err();
    assert!(matches!(err, RenderError::Decode(_)));
}

#[test]
fn from_base64_tolerates_surrounding_whitespace() {
    let payload = format!("  {}\n", encode("region: east\n"));
    let values = Values::from_base64(&payload).unwrap();
    assert_eq!(values.get("region"), Some("east"));
}

// ============================================================================
// Inline --set entries
// ============================================================================

#[test]
fn set_entries_parse_single_pair() {
    let values = Values::from_set_entries(&["region=west"]).unwrap();
    assert_eq!(values.get("region"), Some("west"));
}

#[test]
fn set_entries_parse_comma_separated_pairs() {
    let values = Values::from_set_entries(&["a=1,b=2"]).unwrap();
    assert_eq!(values.get("a"), Some("1"));
    assert_eq!(values.get("b"), Some("2"));
}

#[test]
fn set_entries_later_entry_wins_on_collision() {
    let values = Values::from_set_entries(&["a=1,b=2", "b=3"]).unwrap();
    assert_eq!(values.get("a"), Some("1"));
    assert_eq!(values.get("b"), Some("3"));
}

#[test]
fn set_entries_value_may_contain_equals() {
    let values = Values::from_set_entries(&["connection=host=db;port=5432"]).unwrap();
    assert_eq!(values.get("connection"), Some("host=db;port=5432"));
}

#[test]
fn set_entries_value_may_be_empty() {
    let values = Values::from_set_entries(&["flag="]).unwrap();
    assert_eq!(values.get("flag"), Some(""));
}

#[test]
fn set_entry_without_equals_is_rejected() {
    let err = Values::from_set_entries(&["novalue"]).unwrap_err();
    assert!(matches!(err, RenderError::MalformedSetEntry(_)));
    assert!(err.to_string().contains("novalue"));
}

#[test]
fn set_entry_names_offending_segment_in_comma_list() {
    let err = Values::from_set_entries(&["a=1,oops,b=2"]).unwrap_err();
    assert!(err.to_string().contains("oops"));
    assert!(!err.to_string().contains("a=1"));
}

#[test]
fn set_entry_with_empty_key_is_rejected() {
    let err = Values::from_set_entries(&["=orphan"]).unwrap_err();
    assert!(matches!(err, RenderError::MalformedSetEntry(_)));
}

#[test]
fn set_entries_empty_list_yields_empty_mapping() {
    let values = Values::from_set_entries::<String>(&[]).unwrap();
    assert!(values.is_empty());
}

// ============================================================================
// Precedence merge
// ============================================================================

#[test]
fn merge_disjoint_keys_is_lossless_union() {
    let file = Values::from_yaml("a: 1\n").unwrap();
    let encoded = Values::from_yaml("b: 2\n").unwrap();
    let inline = Values::from_set_entries(&["c=3"]).unwrap();

    let merged = Values::merged([file, encoded, inline]);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged.get("a"), Some("1"));
    assert_eq!(merged.get("b"), Some("2"));
    assert_eq!(merged.get("c"), Some("3"));
}

#[test]
fn merge_higher_tier_wins_on_collision() {
    let file = Values::from_yaml("region: west\nzone: a\n").unwrap();
    let encoded = Values::from_yaml("region: east\n").unwrap();
    let inline = Values::from_set_entries(&["zone=b"]).unwrap();

    let merged = Values::merged([file, encoded, inline]);
    assert_eq!(merged.get("region"), Some("east"));
    assert_eq!(merged.get("zone"), Some("b"));
}

#[test]
fn merge_inline_overrides_encoded_overrides_file() {
    let file = Values::from_yaml("key: from-file\n").unwrap();
    let encoded = Values::from_base64(&encode("key: from-encoded\n")).unwrap();
    let inline = Values::from_set_entries(&["key=from-inline"]).unwrap();

    let merged = Values::merged([file.clone(), encoded.clone(), inline]);
    assert_eq!(merged.get("key"), Some("from-inline"));

    let merged = Values::merged([file, encoded]);
    assert_eq!(merged.get("key"), Some("from-encoded"));
}

#[test]
fn iter_is_ordered_by_key() {
    let values = Values::from_set_entries(&["b=2", "a=1", "c=3"]).unwrap();
    let keys: Vec<&str> = values.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}
