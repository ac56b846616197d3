use crate::encoding::{OffsetEncoding, RangePolicy};

/// Largest source text accepted by default (16 MiB).
pub const DEFAULT_MAX_SOURCE_BYTES: usize = 16 * 1024 * 1024;

/// Environment variable overriding [`crate::TreeOptions::offset_encoding`].
pub const ENV_OFFSET_ENCODING: &str = "KERF_OFFSET_ENCODING";

/// Environment variable overriding [`crate::TreeOptions::range_policy`].
pub const ENV_RANGE_POLICY: &str = "KERF_RANGE_POLICY";

/// Environment variable overriding [`crate::TreeOptions::max_source_bytes`].
pub const ENV_MAX_SOURCE_BYTES: &str = "KERF_MAX_SOURCE_BYTES";

/// Default offset unit: UTF-8 bytes, matching Tree-sitter.
#[must_use]
pub const fn default_offset_encoding() -> OffsetEncoding {
    OffsetEncoding::Utf8
}

/// Default scoping rule for the query range.
#[must_use]
pub const fn default_range_policy() -> RangePolicy {
    RangePolicy::Intersecting
}

/// Default source size limit.
#[must_use]
pub const fn default_max_source_bytes() -> usize {
    DEFAULT_MAX_SOURCE_BYTES
}
