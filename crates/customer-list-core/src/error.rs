//! Error types for query parsing and configuration

use thiserror::Error;

/// A dropdown or header produced a value the query model does not know.
///
/// Callers normalize these to the permissive default rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unknown score filter: {0:?}")]
    UnknownScoreFilter(String),
    #[error("unknown date filter: {0:?}")]
    UnknownDateFilter(String),
    #[error("unknown sort key: {0:?}")]
    UnknownSortKey(String),
    #[error("unknown sort direction: {0:?}")]
    UnknownSortDirection(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
    #[error("malformed query string: {0}")]
    Decode(String),
}
