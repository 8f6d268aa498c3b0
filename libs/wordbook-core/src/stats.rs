//! Derived learning statistics.
//!
//! All ratios return exactly 0.0 when their denominator is zero.

use crate::types::{LearningStats, ReviewRecord, Word, WordStatus};
use serde::{Deserialize, Serialize};

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Correct reviews over reviews for one day.
pub fn accuracy_rate(stats: &LearningStats) -> f64 {
    ratio(f64::from(stats.correct_count), f64::from(stats.reviewed_count))
}

/// Seconds per word touched (new plus reviewed) for one day.
pub fn average_time_per_word(stats: &LearningStats) -> f64 {
    let words = u64::from(stats.new_words_count) + u64::from(stats.reviewed_count);
    ratio(stats.total_time, words as f64)
}

/// Counter-based accuracy of a single word.
pub fn word_accuracy(word: &Word) -> f64 {
    ratio(f64::from(word.correct_count), f64::from(word.review_count))
}

/// Ledger-based accuracy of a single word.
///
/// Computed from the review records alone; reporting only, not a status input.
pub fn review_progress(records: &[ReviewRecord]) -> f64 {
    let correct = records.iter().filter(|r| r.is_correct).count();
    ratio(correct as f64, records.len() as f64)
}

/// Accuracy across all words' counters.
pub fn overall_accuracy(words: &[Word]) -> f64 {
    let reviews: u64 = words.iter().map(|w| u64::from(w.review_count)).sum();
    let correct: u64 = words.iter().map(|w| u64::from(w.correct_count)).sum();
    ratio(correct as f64, reviews as f64)
}

/// Word counts per mastery status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub unlearned: usize,
    pub learning: usize,
    pub mastered: usize,
}

impl StatusCounts {
    pub fn tally(words: &[Word]) -> Self {
        words.iter().fold(Self::default(), |mut counts, word| {
            match word.status {
                WordStatus::Unlearned => counts.unlearned += 1,
                WordStatus::Learning => counts.learning += 1,
                WordStatus::Mastered => counts.mastered += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.unlearned + self.learning + self.mastered
    }

    /// Words still needing review (not Mastered).
    pub fn pending(&self) -> usize {
        self.unlearned + self.learning
    }
}
