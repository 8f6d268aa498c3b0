//! Core vocabulary-learning library.
//!
//! Provides:
//! - Markdown table importer for vocabulary files
//! - Mastery status classification
//! - Spelling mistake taxonomy
//! - Derived accuracy and timing statistics
//! - Practice set selection and typed-answer checking
//! - Shared types (Word, ReviewRecord, LearningStats, etc.)

pub mod error;
pub mod importer;
pub mod matching;
pub mod selection;
pub mod spelling;
pub mod stats;
pub mod status;
pub mod types;

pub use error::{Result, ValidationError};
pub use importer::{parse_table, ParsedTable};
pub use matching::{check_answer, AnswerCheck};
pub use selection::select_practice_set;
pub use spelling::SpellingErrorType;
pub use stats::{
    accuracy_rate, average_time_per_word, overall_accuracy, review_progress, word_accuracy,
    StatusCounts,
};
pub use status::{classify, MasteryRule};
pub use types::{
    EngineSettings, LearningStats, PracticeMode, PracticeRange, ReviewRecord, Word, WordFields,
    WordStatus,
};
