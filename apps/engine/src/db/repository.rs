//! Repository pattern for database access.

use crate::db::error::DbError;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use uuid::Uuid;
use wordbook_core::types::{
    EngineSettings, LearningStats, PracticeRange, ReviewRecord, Word, WordStatus,
};
use wordbook_core::SpellingErrorType;

pub(crate) type Result<T> = std::result::Result<T, DbError>;

/// Repository for word operations.
pub trait WordRepository {
    fn get_word(&self, id: Uuid) -> Result<Option<Word>>;
    /// All words, most recently updated first.
    fn list_words(&self) -> Result<Vec<Word>>;
    fn find_words(&self, range: PracticeRange) -> Result<Vec<Word>>;
    /// Insert a batch and store `day` in one transaction.
    fn insert_words(&self, words: &[Word], day: &LearningStats) -> Result<()>;
    /// Fails with `WordNotFound` when the id is unknown.
    fn update_word(&self, word: &Word) -> Result<()>;
    /// Delete a word and its review records. Returns whether it existed.
    fn delete_word(&self, id: Uuid) -> Result<bool>;
    /// Delete every word and review record. Returns the number of words removed.
    fn clear_words(&self) -> Result<usize>;
}

/// Repository for review record operations.
pub trait ReviewRepository {
    /// Records for one word, oldest first.
    fn get_reviews(&self, word_id: Uuid) -> Result<Vec<ReviewRecord>>;
    fn count_reviews(&self) -> Result<usize>;
    /// Store the updated word, its new record and the day aggregate in one
    /// transaction.
    fn commit_review(&self, word: &Word, record: &ReviewRecord, day: &LearningStats) -> Result<()>;
}

/// Repository for daily statistics.
pub trait StatsRepository {
    fn get_daily_stats(&self, date: NaiveDate) -> Result<Option<LearningStats>>;
    /// Stored days in `from..=to`, oldest first.
    fn get_stats_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<LearningStats>>;
}

/// Repository for settings operations.
pub trait SettingsRepository {
    fn get_settings(&self) -> Result<EngineSettings>;
    fn save_settings(&self, settings: &EngineSettings) -> Result<()>;
}

/// Everything the engine needs from a store.
pub trait Repository: WordRepository + ReviewRepository + StatsRepository + SettingsRepository {}

impl<T> Repository for T where
    T: WordRepository + ReviewRepository + StatsRepository + SettingsRepository
{
}

const WORD_COLUMNS: &str = "id, english, chinese, phonetic, etymology, structure, example, \
    example_translation, memory_tips, review_count, correct_count, error_count, status, \
    created_at, updated_at";

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_SETTINGS)?;
        self.conn.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            params![super::schema::SCHEMA_VERSION],
        )?;
        Ok(())
    }

    fn row_to_word(row: &rusqlite::Row) -> rusqlite::Result<Word> {
        let status_value: i16 = row.get(12)?;
        let status = WordStatus::from_value(status_value).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                12,
                Type::Integer,
                format!("invalid word status: {status_value}").into(),
            )
        })?;

        Ok(Word {
            id: row.get(0)?,
            english: row.get(1)?,
            chinese: row.get(2)?,
            phonetic: row.get(3)?,
            etymology: row.get(4)?,
            structure: row.get(5)?,
            example: row.get(6)?,
            example_translation: row.get(7)?,
            memory_tips: row.get(8)?,
            review_count: row.get(9)?,
            correct_count: row.get(10)?,
            error_count: row.get(11)?,
            status,
            created_at: row.get(13)?,
            updated_at: row.get(14)?,
        })
    }

    fn row_to_review(row: &rusqlite::Row) -> rusqlite::Result<ReviewRecord> {
        let error_code: Option<i16> = row.get(4)?;
        let error_type = match error_code {
            Some(code) => Some(SpellingErrorType::from_code(code).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    4,
                    Type::Integer,
                    format!("invalid error type: {code}").into(),
                )
            })?),
            None => None,
        };

        Ok(ReviewRecord {
            id: row.get(0)?,
            word_id: row.get(1)?,
            review_date: row.get(2)?,
            is_correct: row.get(3)?,
            error_type,
            memory_strength: row.get(5)?,
            review_interval: row.get(6)?,
        })
    }

    fn row_to_stats(row: &rusqlite::Row) -> rusqlite::Result<LearningStats> {
        Ok(LearningStats {
            date: row.get(0)?,
            new_words_count: row.get(1)?,
            reviewed_count: row.get(2)?,
            correct_count: row.get(3)?,
            mastered_count: row.get(4)?,
            total_time: row.get(5)?,
        })
    }

    fn query_words(&self, sql: &str) -> Result<Vec<Word>> {
        let mut stmt = self.conn.prepare(sql)?;
        let words = stmt
            .query_map([], Self::row_to_word)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(words)
    }
}

fn insert_word_row(conn: &Connection, word: &Word) -> Result<()> {
    conn.execute(
        &format!(
            "INSERT INTO words ({WORD_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)"
        ),
        params![
            word.id,
            word.english,
            word.chinese,
            word.phonetic,
            word.etymology,
            word.structure,
            word.example,
            word.example_translation,
            word.memory_tips,
            word.review_count,
            word.correct_count,
            word.error_count,
            word.status.to_value(),
            word.created_at,
            word.updated_at,
        ],
    )?;
    Ok(())
}

fn update_word_row(conn: &Connection, word: &Word) -> Result<()> {
    let changed = conn.execute(
        "UPDATE words SET english = ?2, chinese = ?3, phonetic = ?4, etymology = ?5, structure = ?6,
            example = ?7, example_translation = ?8, memory_tips = ?9, review_count = ?10,
            correct_count = ?11, error_count = ?12, status = ?13, updated_at = ?14
         WHERE id = ?1",
        params![
            word.id,
            word.english,
            word.chinese,
            word.phonetic,
            word.etymology,
            word.structure,
            word.example,
            word.example_translation,
            word.memory_tips,
            word.review_count,
            word.correct_count,
            word.error_count,
            word.status.to_value(),
            word.updated_at,
        ],
    )?;

    if changed == 0 {
        return Err(DbError::WordNotFound(word.id));
    }
    Ok(())
}

fn upsert_stats_row(conn: &Connection, day: &LearningStats) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO learning_stats (date, new_words_count, reviewed_count, correct_count, mastered_count, total_time)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            day.date,
            day.new_words_count,
            day.reviewed_count,
            day.correct_count,
            day.mastered_count,
            day.total_time,
        ],
    )?;
    Ok(())
}

impl WordRepository for SqliteRepository {
    fn get_word(&self, id: Uuid) -> Result<Option<Word>> {
        self.conn
            .query_row(
                &format!("SELECT {WORD_COLUMNS} FROM words WHERE id = ?1"),
                params![id],
                Self::row_to_word,
            )
            .optional()
            .map_err(Into::into)
    }

    fn list_words(&self) -> Result<Vec<Word>> {
        self.query_words(&format!(
            "SELECT {WORD_COLUMNS} FROM words ORDER BY updated_at DESC"
        ))
    }

    fn find_words(&self, range: PracticeRange) -> Result<Vec<Word>> {
        let filter = match range {
            PracticeRange::All => "",
            PracticeRange::PendingReview => "WHERE status < 2",
            PracticeRange::ErrorProne => "WHERE error_count > 0",
        };
        self.query_words(&format!(
            "SELECT {WORD_COLUMNS} FROM words {filter} ORDER BY created_at"
        ))
    }

    fn insert_words(&self, words: &[Word], day: &LearningStats) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        for word in words {
            insert_word_row(&tx, word)?;
        }
        upsert_stats_row(&tx, day)?;
        tx.commit()?;
        Ok(())
    }

    fn update_word(&self, word: &Word) -> Result<()> {
        update_word_row(&self.conn, word)
    }

    fn delete_word(&self, id: Uuid) -> Result<bool> {
        let count = self
            .conn
            .execute("DELETE FROM words WHERE id = ?1", params![id])?;
        Ok(count > 0)
    }

    fn clear_words(&self) -> Result<usize> {
        let count = self.conn.execute("DELETE FROM words", [])?;
        Ok(count)
    }
}

impl ReviewRepository for SqliteRepository {
    fn get_reviews(&self, word_id: Uuid) -> Result<Vec<ReviewRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, word_id, review_date, is_correct, error_type, memory_strength, review_interval
             FROM review_records WHERE word_id = ?1 ORDER BY review_date",
        )?;

        let reviews = stmt
            .query_map(params![word_id], Self::row_to_review)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(reviews)
    }

    fn count_reviews(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM review_records", [], |row| row.get(0))?;
        Ok(count.max(0) as usize)
    }

    fn commit_review(&self, word: &Word, record: &ReviewRecord, day: &LearningStats) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;

        update_word_row(&tx, word)?;
        tx.execute(
            "INSERT INTO review_records (id, word_id, review_date, is_correct, error_type, memory_strength, review_interval)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.id,
                record.word_id,
                record.review_date,
                record.is_correct,
                record.error_type.map(SpellingErrorType::code),
                record.memory_strength,
                record.review_interval,
            ],
        )?;
        upsert_stats_row(&tx, day)?;

        tx.commit()?;
        Ok(())
    }
}

impl StatsRepository for SqliteRepository {
    fn get_daily_stats(&self, date: NaiveDate) -> Result<Option<LearningStats>> {
        self.conn
            .query_row(
                "SELECT date, new_words_count, reviewed_count, correct_count, mastered_count, total_time
                 FROM learning_stats WHERE date = ?1",
                params![date],
                Self::row_to_stats,
            )
            .optional()
            .map_err(Into::into)
    }

    fn get_stats_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<LearningStats>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, new_words_count, reviewed_count, correct_count, mastered_count, total_time
             FROM learning_stats WHERE date >= ?1 AND date <= ?2 ORDER BY date",
        )?;

        let stats = stmt
            .query_map(params![from, to], Self::row_to_stats)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(stats)
    }
}

impl SettingsRepository for SqliteRepository {
    fn get_settings(&self) -> Result<EngineSettings> {
        self.conn
            .query_row(
                "SELECT mastery_min_reviews, mastery_accuracy_threshold, daily_reset_hour FROM settings WHERE id = 1",
                [],
                |row| {
                    Ok(EngineSettings {
                        mastery_min_reviews: row.get(0)?,
                        mastery_accuracy_threshold: row.get(1)?,
                        daily_reset_hour: row.get(2)?,
                    })
                },
            )
            .map_err(Into::into)
    }

    fn save_settings(&self, settings: &EngineSettings) -> Result<()> {
        if settings.daily_reset_hour > 23 {
            return Err(DbError::InvalidData(format!(
                "daily_reset_hour out of range: {}",
                settings.daily_reset_hour
            )));
        }

        self.conn.execute(
            "UPDATE settings SET mastery_min_reviews = ?1, mastery_accuracy_threshold = ?2, daily_reset_hour = ?3 WHERE id = 1",
            params![
                settings.mastery_min_reviews,
                settings.mastery_accuracy_threshold,
                settings.daily_reset_hour,
            ],
        )?;
        Ok(())
    }
}
