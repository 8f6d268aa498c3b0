//! Database location.

use crate::db::SqliteRepository;
use crate::engine::Engine;
use crate::error::{EngineError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "wordbook";
const DB_FILE: &str = "wordbook.db";

/// Where the engine keeps its data.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub db_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl EngineConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Open (creating if needed) the database and build an engine on it.
    pub fn open(&self) -> Result<Engine<SqliteRepository>> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent).map_err(EngineError::access)?;
        }

        tracing::debug!(path = %self.db_path.display(), "opening database");
        let repository = SqliteRepository::open(&self.db_path).map_err(EngineError::access)?;
        Engine::new(repository)
    }
}

/// Platform data directory, falling back to the current directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DB_FILE)
}
