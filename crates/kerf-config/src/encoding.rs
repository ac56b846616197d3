use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unit in which callers express offsets and receive statement ranges.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OffsetEncoding {
    /// UTF-8 byte offsets, the native Tree-sitter unit.
    #[default]
    #[strum(to_string = "utf8", serialize = "utf-8", serialize = "bytes")]
    #[serde(alias = "utf-8", alias = "bytes")]
    Utf8,
    /// UTF-16 code units, as used by LSP clients and most editors.
    #[strum(to_string = "utf16", serialize = "utf-16")]
    #[serde(alias = "utf-16")]
    Utf16,
}

/// How the query range selects the statements that appear in a tree.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RangePolicy {
    /// Every statement whose extent intersects the range is emitted with its
    /// full, unclipped span.
    #[default]
    Intersecting,
    /// Only statements lying wholly inside the range are emitted, together
    /// with the compound statements enclosing a range boundary.
    Contained,
}

/// Errors encountered while parsing an [`OffsetEncoding`] from text.
pub type OffsetEncodingParseError = strum::ParseError;

/// Errors encountered while parsing a [`RangePolicy`] from text.
pub type RangePolicyParseError = strum::ParseError;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("utf8", OffsetEncoding::Utf8)]
    #[case("UTF-8", OffsetEncoding::Utf8)]
    #[case("bytes", OffsetEncoding::Utf8)]
    #[case("utf16", OffsetEncoding::Utf16)]
    #[case("Utf-16", OffsetEncoding::Utf16)]
    fn offset_encoding_parses_aliases(#[case] input: &str, #[case] expected: OffsetEncoding) {
        assert_eq!(OffsetEncoding::from_str(input), Ok(expected));
    }

    #[rstest]
    #[case("intersecting", RangePolicy::Intersecting)]
    #[case("CONTAINED", RangePolicy::Contained)]
    fn range_policy_parses_names(#[case] input: &str, #[case] expected: RangePolicy) {
        assert_eq!(RangePolicy::from_str(input), Ok(expected));
    }

    #[test]
    fn unknown_encoding_is_rejected() {
        assert!(OffsetEncoding::from_str("latin1").is_err());
    }

    #[test]
    fn encodings_display_in_snake_case() {
        assert_eq!(OffsetEncoding::Utf16.to_string(), "utf16");
        assert_eq!(RangePolicy::Contained.to_string(), "contained");
    }
}
