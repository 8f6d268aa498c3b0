//! Statistics read side.

use super::Engine;
use crate::db::date_utils::study_today;
use crate::db::Repository;
use crate::error::{ReadResultExt, Result};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;
use wordbook_core::stats::{
    accuracy_rate, average_time_per_word, overall_accuracy, review_progress, word_accuracy,
    StatusCounts,
};
use wordbook_core::types::{LearningStats, WordStatus};

/// Longest streak looked back over.
const MAX_STREAK_DAYS: i64 = 366;

/// Longest calendar returned; larger requests are clamped.
pub const MAX_CALENDAR_DAYS: usize = 3660;

/// What to compute statistics for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsTarget {
    Word(Uuid),
    Day(NaiveDate),
}

/// Per-word statistics.
#[derive(Debug, Clone, Serialize)]
pub struct WordStats {
    pub word_id: Uuid,
    pub status: WordStatus,
    pub review_count: u32,
    pub correct_count: u32,
    pub error_count: u32,
    /// From counters.
    pub accuracy: f64,
    /// From review records.
    pub review_progress: f64,
    pub record_count: usize,
}

/// One day's aggregate with its derived ratios.
#[derive(Debug, Clone, Serialize)]
pub struct DayStats {
    pub stats: LearningStats,
    pub accuracy_rate: f64,
    pub average_time_per_word: f64,
}

impl From<LearningStats> for DayStats {
    fn from(stats: LearningStats) -> Self {
        Self {
            accuracy_rate: accuracy_rate(&stats),
            average_time_per_word: average_time_per_word(&stats),
            stats,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub enum DerivedStats {
    Word(WordStats),
    Day(DayStats),
}

/// Overview across the whole word list.
#[derive(Debug, Clone, Serialize)]
pub struct StudySummary {
    pub total_words: usize,
    pub status_counts: StatusCounts,
    pub overall_accuracy: f64,
    pub pending_review: usize,
    pub total_reviews: usize,
    pub streak_days: usize,
    pub today: DayStats,
}

impl<R: Repository> Engine<R> {
    /// Statistics for a word or a day.
    ///
    /// Unknown words give `None`; days without activity give zeroed stats.
    pub fn compute_stats(&self, target: StatsTarget) -> Result<Option<DerivedStats>> {
        match target {
            StatsTarget::Word(id) => Ok(self.word_stats(id)?.map(DerivedStats::Word)),
            StatsTarget::Day(date) => Ok(Some(DerivedStats::Day(self.day_summary(date)?))),
        }
    }

    pub fn word_stats(&self, id: Uuid) -> Result<Option<WordStats>> {
        let Some(word) = self.repo.get_word(id).or_access()? else {
            return Ok(None);
        };
        let records = self.repo.get_reviews(id).or_access()?;

        Ok(Some(WordStats {
            word_id: word.id,
            status: word.status,
            review_count: word.review_count,
            correct_count: word.correct_count,
            error_count: word.error_count,
            accuracy: word_accuracy(&word),
            review_progress: review_progress(&records),
            record_count: records.len(),
        }))
    }

    pub fn day_summary(&self, date: NaiveDate) -> Result<DayStats> {
        Ok(self.day_stats(date)?.into())
    }

    /// The last `days` study days ending today, oldest first, zero-filled.
    ///
    /// At most `MAX_CALENDAR_DAYS` are returned.
    pub fn calendar(&self, days: usize) -> Result<Vec<DayStats>> {
        let today = study_today(self.settings.daily_reset_hour);
        self.calendar_until(today, days)
    }

    fn calendar_until(&self, end: NaiveDate, days: usize) -> Result<Vec<DayStats>> {
        let days = days.min(MAX_CALENDAR_DAYS);
        if days == 0 {
            return Ok(Vec::new());
        }

        // Clamped, so the cast cannot wrap.
        let start = days_before(end, days as i64 - 1);
        let stored: HashMap<NaiveDate, LearningStats> = self
            .repo
            .get_stats_range(start, end)
            .or_access()?
            .into_iter()
            .map(|s| (s.date, s))
            .collect();

        Ok(start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| {
                stored
                    .get(&date)
                    .cloned()
                    .unwrap_or_else(|| LearningStats::empty(date))
                    .into()
            })
            .collect())
    }

    /// Consecutive days with at least one review, counting back from `end`.
    ///
    /// An idle `end` does not break the streak.
    fn streak_until(&self, end: NaiveDate) -> Result<usize> {
        let start = days_before(end, MAX_STREAK_DAYS);
        let active: HashMap<NaiveDate, bool> = self
            .repo
            .get_stats_range(start, end)
            .or_access()?
            .into_iter()
            .map(|s| (s.date, s.reviewed_count > 0))
            .collect();
        let is_active = |date: &NaiveDate| active.get(date).copied().unwrap_or(false);

        let mut current = if is_active(&end) {
            Some(end)
        } else {
            end.pred_opt()
        };
        let mut streak = 0;
        while let Some(date) = current.filter(|d| *d >= start && is_active(d)) {
            streak += 1;
            current = date.pred_opt();
        }
        Ok(streak)
    }

    pub fn study_summary(&self) -> Result<StudySummary> {
        let words = self.repo.list_words().or_access()?;
        let status_counts = StatusCounts::tally(&words);
        let today = study_today(self.settings.daily_reset_hour);

        Ok(StudySummary {
            total_words: words.len(),
            status_counts,
            overall_accuracy: overall_accuracy(&words),
            pending_review: status_counts.pending(),
            total_reviews: self.repo.count_reviews().or_access()?,
            streak_days: self.streak_until(today)?,
            today: self.day_summary(today)?,
        })
    }
}

/// `date` minus `days`, saturating at the earliest representable date.
fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|span| date.checked_sub_signed(span))
        .unwrap_or(NaiveDate::MIN)
}
