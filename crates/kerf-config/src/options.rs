use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defaults::{
    ENV_MAX_SOURCE_BYTES, ENV_OFFSET_ENCODING, ENV_RANGE_POLICY, default_max_source_bytes,
    default_offset_encoding, default_range_policy,
};
use crate::encoding::{OffsetEncoding, RangePolicy};
use crate::error::ConfigError;

/// Options applied when constructing and building a statement tree.
///
/// Missing fields fall back to their defaults when deserializing, so an
/// empty table is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Unit of every offset exchanged with the caller.
    pub offset_encoding: OffsetEncoding,
    /// Rule deciding which statements the query range admits.
    pub range_policy: RangePolicy,
    /// Largest source text, in bytes, a tree accepts.
    pub max_source_bytes: usize,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            offset_encoding: default_offset_encoding(),
            range_policy: default_range_policy(),
            max_source_bytes: default_max_source_bytes(),
        }
    }
}

impl TreeOptions {
    /// Returns a copy using the given offset encoding.
    #[must_use]
    pub const fn with_offset_encoding(mut self, encoding: OffsetEncoding) -> Self {
        self.offset_encoding = encoding;
        self
    }

    /// Returns a copy using the given range policy.
    #[must_use]
    pub const fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    /// Returns a copy using the given source size limit.
    #[must_use]
    pub const fn with_max_source_bytes(mut self, limit: usize) -> Self {
        self.max_source_bytes = limit;
        self
    }

    /// Resolves options from the process environment on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a `KERF_*` variable holds a
    /// value the option does not accept.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// Resolves options through `lookup` on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a looked-up value is not
    /// accepted by its option.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().overlay(lookup)
    }

    /// Applies overrides from `lookup` to these options.
    ///
    /// Blank values are ignored so an exported-but-empty variable does not
    /// clobber the current setting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a value cannot be parsed.
    pub fn overlay<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = non_blank(lookup(ENV_OFFSET_ENCODING)) {
            self.offset_encoding = OffsetEncoding::from_str(&raw).map_err(|_| {
                ConfigError::invalid_value(ENV_OFFSET_ENCODING, &raw, "expected utf8 or utf16")
            })?;
        }
        if let Some(raw) = non_blank(lookup(ENV_RANGE_POLICY)) {
            self.range_policy = RangePolicy::from_str(&raw).map_err(|_| {
                ConfigError::invalid_value(
                    ENV_RANGE_POLICY,
                    &raw,
                    "expected intersecting or contained",
                )
            })?;
        }
        if let Some(raw) = non_blank(lookup(ENV_MAX_SOURCE_BYTES)) {
            self.max_source_bytes = raw.parse::<usize>().map_err(|error| {
                ConfigError::invalid_value(ENV_MAX_SOURCE_BYTES, &raw, error.to_string())
            })?;
        }
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;
    use crate::defaults::DEFAULT_MAX_SOURCE_BYTES;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_bytes_and_intersecting_scope() {
        let options = TreeOptions::default();
        assert_eq!(options.offset_encoding, OffsetEncoding::Utf8);
        assert_eq!(options.range_policy, RangePolicy::Intersecting);
        assert_eq!(options.max_source_bytes, DEFAULT_MAX_SOURCE_BYTES);
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let options = TreeOptions::from_lookup(|_| None).expect("options");
        assert_eq!(options, TreeOptions::default());
    }

    #[test]
    fn lookup_overrides_every_option() {
        let options = TreeOptions::from_lookup(lookup_from(&[
            (ENV_OFFSET_ENCODING, "utf16"),
            (ENV_RANGE_POLICY, "contained"),
            (ENV_MAX_SOURCE_BYTES, "4096"),
        ]))
        .expect("options");

        assert_eq!(options.offset_encoding, OffsetEncoding::Utf16);
        assert_eq!(options.range_policy, RangePolicy::Contained);
        assert_eq!(options.max_source_bytes, 4096);
    }

    #[test]
    fn blank_values_are_ignored() {
        let options = TreeOptions::from_lookup(lookup_from(&[(ENV_OFFSET_ENCODING, "   ")]))
            .expect("options");
        assert_eq!(options.offset_encoding, OffsetEncoding::Utf8);
    }

    #[rstest]
    #[case(ENV_OFFSET_ENCODING, "ebcdic")]
    #[case(ENV_RANGE_POLICY, "everything")]
    #[case(ENV_MAX_SOURCE_BYTES, "lots")]
    fn invalid_values_name_the_variable(#[case] key: &str, #[case] value: &str) {
        let error = TreeOptions::from_lookup(lookup_from(&[(key, value)])).expect_err("invalid");
        let ConfigError::InvalidValue {
            key: reported,
            value: rejected,
            ..
        } = error;
        assert_eq!(reported, key);
        assert_eq!(rejected, value);
    }

    #[test]
    fn builder_methods_replace_single_fields() {
        let options = TreeOptions::default()
            .with_offset_encoding(OffsetEncoding::Utf16)
            .with_max_source_bytes(10);
        assert_eq!(options.offset_encoding, OffsetEncoding::Utf16);
        assert_eq!(options.range_policy, RangePolicy::Intersecting);
        assert_eq!(options.max_source_bytes, 10);
    }
}
