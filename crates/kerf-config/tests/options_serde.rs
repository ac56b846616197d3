//! Deserialization tests for `TreeOptions`.
//!
//! Embedders usually nest the options inside their own configuration files,
//! so partial tables must fill in defaults and enum values must accept the
//! documented spellings.

use kerf_config::{DEFAULT_MAX_SOURCE_BYTES, OffsetEncoding, RangePolicy, TreeOptions};
use rstest::rstest;

#[test]
fn empty_object_deserializes_to_defaults() {
    let options: TreeOptions =
        serde_json::from_str("{}").unwrap_or_else(|err| panic!("deserialize: {err}"));
    assert_eq!(options, TreeOptions::default());
}

#[rstest]
#[case(r#"{"offset_encoding":"utf16"}"#, OffsetEncoding::Utf16)]
#[case(r#"{"offset_encoding":"utf-16"}"#, OffsetEncoding::Utf16)]
#[case(r#"{"offset_encoding":"bytes"}"#, OffsetEncoding::Utf8)]
fn offset_encoding_accepts_aliases(#[case] json: &str, #[case] expected: OffsetEncoding) {
    let options: TreeOptions =
        serde_json::from_str(json).unwrap_or_else(|err| panic!("deserialize: {err}"));
    assert_eq!(options.offset_encoding, expected);
    assert_eq!(options.max_source_bytes, DEFAULT_MAX_SOURCE_BYTES);
}

#[test]
fn range_policy_round_trips_through_json() {
    let options = TreeOptions::default().with_range_policy(RangePolicy::Contained);
    let json = serde_json::to_string(&options).unwrap_or_else(|err| panic!("serialize: {err}"));
    assert!(json.contains(r#""range_policy":"contained""#), "{json}");
}

#[test]
fn unknown_policy_is_rejected() {
    let result: Result<TreeOptions, _> = serde_json::from_str(r#"{"range_policy":"fuzzy"}"#);
    assert!(result.is_err());
}
