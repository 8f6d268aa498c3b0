//! In-memory repository for tests and embedding without SQLite.

use crate::db::error::DbError;
use crate::db::repository::{
    ReviewRepository, Result, SettingsRepository, StatsRepository, WordRepository,
};
use chrono::NaiveDate;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, HashSet};
use uuid::Uuid;
use wordbook_core::types::{EngineSettings, LearningStats, PracticeRange, ReviewRecord, Word};

#[derive(Debug, Default)]
struct Tables {
    words: HashMap<Uuid, Word>,
    reviews: Vec<ReviewRecord>,
    stats: BTreeMap<NaiveDate, LearningStats>,
    settings: EngineSettings,
}

/// Repository backed by plain collections.
///
/// Writes can be made to fail on demand, which leaves the tables untouched.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    tables: RefCell<Tables>,
    fail_writes: Cell<bool>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail until reset.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.get() {
            return Err(DbError::WriteRejected("store is read-only".to_string()));
        }
        Ok(())
    }
}

impl WordRepository for MemoryRepository {
    fn get_word(&self, id: Uuid) -> Result<Option<Word>> {
        Ok(self.tables.borrow().words.get(&id).cloned())
    }

    fn list_words(&self) -> Result<Vec<Word>> {
        let mut words: Vec<Word> = self.tables.borrow().words.values().cloned().collect();
        words.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(words)
    }

    fn find_words(&self, range: PracticeRange) -> Result<Vec<Word>> {
        let mut words: Vec<Word> = self
            .tables
            .borrow()
            .words
            .values()
            .filter(|w| range.matches(w))
            .cloned()
            .collect();
        words.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(words)
    }

    fn insert_words(&self, words: &[Word], day: &LearningStats) -> Result<()> {
        self.check_writable()?;
        let mut tables = self.tables.borrow_mut();

        let mut batch_ids = HashSet::with_capacity(words.len());
        if let Some(dup) = words
            .iter()
            .find(|w| tables.words.contains_key(&w.id) || !batch_ids.insert(w.id))
        {
            return Err(DbError::InvalidData(format!("duplicate word id: {}", dup.id)));
        }

        for word in words {
            tables.words.insert(word.id, word.clone());
        }
        tables.stats.insert(day.date, day.clone());
        Ok(())
    }

    fn update_word(&self, word: &Word) -> Result<()> {
        self.check_writable()?;
        let mut tables = self.tables.borrow_mut();
        match tables.words.get_mut(&word.id) {
            Some(existing) => {
                *existing = word.clone();
                Ok(())
            }
            None => Err(DbError::WordNotFound(word.id)),
        }
    }

    fn delete_word(&self, id: Uuid) -> Result<bool> {
        self.check_writable()?;
        let mut tables = self.tables.borrow_mut();
        let existed = tables.words.remove(&id).is_some();
        tables.reviews.retain(|r| r.word_id != id);
        Ok(existed)
    }

    fn clear_words(&self) -> Result<usize> {
        self.check_writable()?;
        let mut tables = self.tables.borrow_mut();
        let count = tables.words.len();
        tables.words.clear();
        tables.reviews.clear();
        Ok(count)
    }
}

impl ReviewRepository for MemoryRepository {
    fn get_reviews(&self, word_id: Uuid) -> Result<Vec<ReviewRecord>> {
        let mut reviews: Vec<ReviewRecord> = self
            .tables
            .borrow()
            .reviews
            .iter()
            .filter(|r| r.word_id == word_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| a.review_date.cmp(&b.review_date));
        Ok(reviews)
    }

    fn count_reviews(&self) -> Result<usize> {
        Ok(self.tables.borrow().reviews.len())
    }

    fn commit_review(&self, word: &Word, record: &ReviewRecord, day: &LearningStats) -> Result<()> {
        self.check_writable()?;
        let mut tables = self.tables.borrow_mut();

        let Some(existing) = tables.words.get_mut(&word.id) else {
            return Err(DbError::WordNotFound(word.id));
        };
        *existing = word.clone();
        tables.reviews.push(record.clone());
        tables.stats.insert(day.date, day.clone());
        Ok(())
    }
}

impl StatsRepository for MemoryRepository {
    fn get_daily_stats(&self, date: NaiveDate) -> Result<Option<LearningStats>> {
        Ok(self.tables.borrow().stats.get(&date).cloned())
    }

    fn get_stats_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<LearningStats>> {
        if from > to {
            return Ok(Vec::new());
        }
        Ok(self
            .tables
            .borrow()
            .stats
            .range(from..=to)
            .map(|(_, stats)| stats.clone())
            .collect())
    }
}

impl SettingsRepository for MemoryRepository {
    fn get_settings(&self) -> Result<EngineSettings> {
        Ok(self.tables.borrow().settings.clone())
    }

    fn save_settings(&self, settings: &EngineSettings) -> Result<()> {
        self.check_writable()?;
        if settings.daily_reset_hour > 23 {
            return Err(DbError::InvalidData(format!(
                "daily_reset_hour out of range: {}",
                settings.daily_reset_hour
            )));
        }
        self.tables.borrow_mut().settings = settings.clone();
        Ok(())
    }
}
