//! Engine error types.

use crate::db::DbError;
use thiserror::Error;
use uuid::Uuid;
use wordbook_core::ValidationError;

/// Result type alias using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Failures surfaced by engine operations.
///
/// Every variant means nothing was changed.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("word not found: {0}")]
    NotFound(Uuid),

    #[error("access error: {0}")]
    Access(String),

    #[error("persistence error: {0}")]
    Persistence(DbError),
}

impl EngineError {
    /// Wrap a failed read of a file or the store.
    pub fn access(err: impl std::fmt::Display) -> Self {
        Self::Access(err.to_string())
    }
}

impl From<DbError> for EngineError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::WordNotFound(id) => Self::NotFound(id),
            other => Self::Persistence(other),
        }
    }
}

/// Map store read failures to `EngineError::Access`.
pub(crate) trait ReadResultExt<T> {
    fn or_access(self) -> Result<T>;
}

impl<T> ReadResultExt<T> for std::result::Result<T, DbError> {
    fn or_access(self) -> Result<T> {
        self.map_err(EngineError::access)
    }
}
