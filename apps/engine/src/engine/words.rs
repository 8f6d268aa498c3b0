//! Word management.

use super::Engine;
use crate::db::Repository;
use crate::error::{EngineError, ReadResultExt, Result};
use chrono::Utc;
use uuid::Uuid;
use wordbook_core::types::{PracticeRange, Word, WordFields};

impl<R: Repository> Engine<R> {
    /// Create a word from manually entered fields.
    ///
    /// Counts towards today's new words.
    pub fn create_word(&self, fields: WordFields) -> Result<Uuid> {
        fields.validate()?;

        let now = Utc::now();
        let word = Word::new(fields, now);
        let mut day = self.day_stats(self.study_day(now))?;
        day.new_words_count = day.new_words_count.saturating_add(1);

        self.repo.insert_words(std::slice::from_ref(&word), &day)?;
        tracing::info!(word_id = %word.id, english = %word.english, "word created");
        Ok(word.id)
    }

    /// Replace a word's text fields. Counters and status are untouched.
    pub fn edit_word(&self, id: Uuid, fields: WordFields) -> Result<()> {
        fields.validate()?;

        let mut word = self
            .repo
            .get_word(id)
            .or_access()?
            .ok_or(EngineError::NotFound(id))?;
        word.apply_fields(fields, Utc::now());

        self.repo.update_word(&word)?;
        tracing::debug!(word_id = %id, "word edited");
        Ok(())
    }

    /// Delete a word and its review records. Unknown ids are ignored.
    pub fn delete_word(&self, id: Uuid) -> Result<()> {
        if self.repo.delete_word(id)? {
            tracing::info!(word_id = %id, "word deleted");
        } else {
            tracing::debug!(word_id = %id, "delete skipped, word not found");
        }
        Ok(())
    }

    /// Delete every word and review record. Daily statistics are kept.
    pub fn clear_all_words(&self) -> Result<usize> {
        let count = self.repo.clear_words()?;
        tracing::warn!(count, "all words cleared");
        Ok(count)
    }

    pub fn get_word(&self, id: Uuid) -> Result<Option<Word>> {
        self.repo.get_word(id).or_access()
    }

    /// All words, most recently updated first.
    pub fn list_words(&self) -> Result<Vec<Word>> {
        self.repo.list_words().or_access()
    }

    /// Words whose english or chinese contains `query`, ignoring case.
    pub fn search_words(&self, query: &str) -> Result<Vec<Word>> {
        let words = self.list_words()?;
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(words);
        }

        Ok(words
            .into_iter()
            .filter(|w| {
                w.english.to_lowercase().contains(&query) || w.chinese.to_lowercase().contains(&query)
            })
            .collect())
    }

    /// Words not yet mastered, least recently touched first.
    pub fn review_queue(&self) -> Result<Vec<Word>> {
        let mut words = self
            .repo
            .find_words(PracticeRange::PendingReview)
            .or_access()?;
        words.sort_by(|a, b| a.updated_at.cmp(&b.updated_at));
        Ok(words)
    }
}
