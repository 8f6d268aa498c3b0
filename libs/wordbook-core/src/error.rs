//! Error types for wordbook-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Content rejected before anything is stored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("insufficient content: expected a header and a separator line")]
    InsufficientContent,

    #[error("bad header: expected at least 2 columns, found {columns}")]
    BadHeader { columns: usize },

    #[error("no valid entries")]
    NoValidEntries,

    #[error("unknown error type code: {code}")]
    UnknownErrorType { code: i16 },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}
