//! SQLite schema definitions.

/// Current schema version for migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema for the local SQLite database.
pub const SCHEMA: &str = r#"
PRAGMA foreign_keys = ON;

-- Vocabulary entries
CREATE TABLE IF NOT EXISTS words (
    id BLOB PRIMARY KEY,
    english TEXT NOT NULL,
    chinese TEXT NOT NULL,
    phonetic TEXT NOT NULL DEFAULT '',
    etymology TEXT NOT NULL DEFAULT '',
    structure TEXT NOT NULL DEFAULT '',
    example TEXT NOT NULL DEFAULT '',
    example_translation TEXT NOT NULL DEFAULT '',
    memory_tips TEXT NOT NULL DEFAULT '',
    review_count INTEGER NOT NULL DEFAULT 0 CHECK (review_count >= 0),
    correct_count INTEGER NOT NULL DEFAULT 0 CHECK (correct_count >= 0),
    error_count INTEGER NOT NULL DEFAULT 0 CHECK (error_count >= 0),
    status INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    CHECK (correct_count <= review_count)
);

-- Practice outcomes, owned by their word
CREATE TABLE IF NOT EXISTS review_records (
    id BLOB PRIMARY KEY,
    word_id BLOB NOT NULL REFERENCES words(id) ON DELETE CASCADE,
    review_date TEXT NOT NULL,
    is_correct INTEGER NOT NULL,
    error_type INTEGER,
    memory_strength REAL NOT NULL DEFAULT 0,
    review_interval REAL NOT NULL DEFAULT 0
);

-- Daily aggregates
CREATE TABLE IF NOT EXISTS learning_stats (
    date TEXT PRIMARY KEY,
    new_words_count INTEGER NOT NULL DEFAULT 0,
    reviewed_count INTEGER NOT NULL DEFAULT 0,
    correct_count INTEGER NOT NULL DEFAULT 0,
    mastered_count INTEGER NOT NULL DEFAULT 0,
    total_time REAL NOT NULL DEFAULT 0
);

-- Engine settings
CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    mastery_min_reviews INTEGER NOT NULL DEFAULT 5,
    mastery_accuracy_threshold REAL NOT NULL DEFAULT 0.8,
    daily_reset_hour INTEGER NOT NULL DEFAULT 0
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_words_status ON words(status);
CREATE INDEX IF NOT EXISTS idx_words_updated ON words(updated_at);
CREATE INDEX IF NOT EXISTS idx_review_records_word ON review_records(word_id);
"#;

/// Initialize settings if not exists.
pub const INIT_SETTINGS: &str = r#"
INSERT OR IGNORE INTO settings (id) VALUES (1);
"#;
