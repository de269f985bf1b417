//! Error types for query result handling

/// Errors raised by the query result core.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A single result was asserted to be a variant it is not
    #[error("Expected {value} to be a {expected} but it was a {actual}")]
    TypeMismatch {
        /// Rendered form of the offending result
        value: String,
        /// Variant the caller asked for
        expected: &'static str,
        /// Variant the result actually is
        actual: &'static str,
    },

    /// A result set was asserted to be uniform but holds other variants
    #[error("{set} has elements that are not {expected} results")]
    MixedResultSet {
        /// Rendered form of the whole offending set
        set: String,
        /// Variant the caller asked for
        expected: &'static str,
    },

    /// A target label string could not be parsed
    #[error("Invalid target label: {0}")]
    InvalidLabel(String),

    /// Unknown output format name
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for query result operations.
pub type QueryValueResult<T> = Result<T, QueryError>;
