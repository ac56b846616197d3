use thiserror::Error;

/// Errors raised while resolving [`crate::TreeOptions`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// An override carried a value the option does not accept.
    #[error("invalid value '{value}' for {key}: {message}")]
    InvalidValue {
        /// Name of the environment variable or option key.
        key: String,
        /// The rejected value.
        value: String,
        /// Description of the accepted values.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}
