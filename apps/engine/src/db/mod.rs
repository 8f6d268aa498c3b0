//! Local storage for words, review records and daily statistics.

pub mod date_utils;
pub mod error;
pub mod memory;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use memory::MemoryRepository;
pub use repository::{
    Repository, ReviewRepository, SettingsRepository, SqliteRepository, StatsRepository,
    WordRepository,
};
