//! Vocabulary learning-progress engine.
//!
//! Tracks words, records practice outcomes, classifies mastery and keeps
//! per-day learning statistics on top of a pluggable repository. SQLite is
//! the default store; `MemoryRepository` serves tests and embedding.

pub mod config;
pub mod db;
pub mod engine;
pub mod error;

pub use config::{default_db_path, EngineConfig};
pub use db::{DbError, MemoryRepository, Repository, SqliteRepository};
pub use engine::{
    BatchFailure, BatchResult, DayStats, DerivedStats, Engine, ImportResult, PracticeSession,
    StatsTarget, StudySummary, TypedReview, WordStats, MAX_CALENDAR_DAYS,
};
pub use error::{EngineError, Result};

pub use wordbook_core::{
    AnswerCheck, EngineSettings, LearningStats, PracticeMode, PracticeRange, ReviewRecord,
    SpellingErrorType, ValidationError, Word, WordFields, WordStatus,
};
