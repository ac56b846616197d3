//! Options shared by every statement tree built through `kerf-syntax`.
//!
//! [`TreeOptions`] decides which unit offsets are measured in, how the query
//! range scopes emitted statements, and how much source a single tree may
//! parse. Options deserialize with serde so embedders can slot them into
//! their own configuration files, and [`TreeOptions::from_env`] overlays the
//! `KERF_*` environment variables on top of the defaults.

mod defaults;
mod encoding;
mod error;
mod options;

pub use defaults::{
    DEFAULT_MAX_SOURCE_BYTES, ENV_MAX_SOURCE_BYTES, ENV_OFFSET_ENCODING, ENV_RANGE_POLICY,
    default_max_source_bytes, default_offset_encoding, default_range_policy,
};
pub use encoding::{OffsetEncoding, OffsetEncodingParseError, RangePolicy, RangePolicyParseError};
pub use error::ConfigError;
pub use options::TreeOptions;
