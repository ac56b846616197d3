//! Error types for statement tree construction.
//!
//! Every failure is local to a single tree: nothing here is retried and no
//! variant leaves shared state behind.

use thiserror::Error;

use crate::language::SupportedLanguage;

/// Errors from building or configuring a [`crate::StatementTree`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatementTreeError {
    /// The language identifier does not name a supported language.
    #[error("unsupported language: '{language}'")]
    UnsupportedLanguage {
        /// The identifier supplied by the caller.
        language: String,
    },

    /// The query range is inverted or extends past the end of the source.
    #[error("invalid range {start}..{end} for source of length {len}")]
    InvalidRange {
        /// Start of the requested range.
        start: usize,
        /// End of the requested range.
        end: usize,
        /// Length of the source in the configured offset unit.
        len: usize,
    },

    /// The source exceeds the configured size limit.
    #[error("source of {len} bytes exceeds the limit of {limit} bytes")]
    SourceTooLarge {
        /// Length of the source in bytes.
        len: usize,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// Failed to initialise the Tree-sitter parser for a language.
    #[error("failed to initialise parser for {language}: {message}")]
    ParserInit {
        /// The language that failed to initialise.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },

    /// The parser did not produce a syntax tree.
    #[error("failed to parse {language}: {message}")]
    ParseFailure {
        /// The language that failed to parse.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },

    /// `build` was called on a tree that has already been built.
    #[error("statement tree has already been built")]
    AlreadyBuilt,

    /// The builder produced a node violating the tree invariants.
    #[error("inconsistent statement tree: {message}")]
    Inconsistent {
        /// Description of the violated invariant.
        message: String,
    },
}

impl StatementTreeError {
    /// Creates an unsupported language error.
    #[must_use]
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
        }
    }

    /// Creates an invalid range error.
    #[must_use]
    pub const fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::InvalidRange { start, end, len }
    }

    /// Creates a source size error.
    #[must_use]
    pub const fn source_too_large(len: usize, limit: usize) -> Self {
        Self::SourceTooLarge { len, limit }
    }

    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParserInit {
            language,
            message: message.into(),
        }
    }

    /// Creates a parse failure.
    #[must_use]
    pub fn parse_failure(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParseFailure {
            language,
            message: message.into(),
        }
    }

    /// Creates an invariant violation error.
    #[must_use]
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::Inconsistent {
            message: message.into(),
        }
    }
}
