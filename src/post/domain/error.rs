//! Error types for post domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing post domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostDomainError {
    /// The poster name is empty after trimming.
    #[error("poster must not be empty")]
    EmptyPoster,

    /// The poster name exceeds the storage limit.
    #[error("poster exceeds {max} character limit: {value}")]
    PosterTooLong {
        /// The rejected value.
        value: String,
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The origin source is empty after trimming.
    #[error("source must not be empty")]
    EmptySource,

    /// The origin source exceeds the storage limit.
    #[error("source exceeds {max} character limit: {value}")]
    SourceTooLong {
        /// The rejected value.
        value: String,
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// A counter field holds a negative value.
    #[error("{field} must not be negative (got {value})")]
    NegativeCount {
        /// Name of the offending counter.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A page size of zero was requested.
    #[error("page size must be at least 1")]
    EmptyPage,
}

/// Error returned while parsing a media kind from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown media kind: {0}")]
pub struct ParseMediaKindError(pub String);
