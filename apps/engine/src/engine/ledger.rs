//! Review ledger: records practice outcomes and keeps counters, status and
//! daily statistics consistent with them.

use super::Engine;
use crate::db::Repository;
use crate::error::{EngineError, ReadResultExt, Result};
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;
use wordbook_core::matching::{check_answer, AnswerCheck};
use wordbook_core::types::{ReviewRecord, Word, WordStatus};
use wordbook_core::SpellingErrorType;

/// Outcome of a typed single-mode answer.
#[derive(Debug, Clone)]
pub struct TypedReview {
    pub check: AnswerCheck,
    pub record: ReviewRecord,
}

/// One batch entry that could not be recorded.
#[derive(Debug)]
pub struct BatchFailure {
    pub word_id: Uuid,
    pub english: String,
    pub error: EngineError,
}

/// Per-entry outcome of a batch save.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub succeeded: Vec<ReviewRecord>,
    pub failed: Vec<BatchFailure>,
}

impl BatchResult {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl<R: Repository> Engine<R> {
    /// Record one practice outcome.
    ///
    /// Only the first of `error_types` is kept, and none when the answer was
    /// correct.
    pub fn record_review(
        &self,
        word_id: Uuid,
        is_correct: bool,
        error_types: &[SpellingErrorType],
    ) -> Result<ReviewRecord> {
        self.record_timed_review(word_id, is_correct, error_types, 0.0)
    }

    /// Record one practice outcome and add `seconds` to today's study time.
    pub fn record_timed_review(
        &self,
        word_id: Uuid,
        is_correct: bool,
        error_types: &[SpellingErrorType],
        seconds: f64,
    ) -> Result<ReviewRecord> {
        let mut word = self
            .repo
            .get_word(word_id)
            .or_access()?
            .ok_or(EngineError::NotFound(word_id))?;

        let now = Utc::now();
        let record = ReviewRecord::new(word_id, is_correct, error_types, now);
        let previous = word.status;

        word.review_count = word.review_count.saturating_add(1);
        if is_correct {
            word.correct_count = word.correct_count.saturating_add(1);
        } else {
            word.error_count = word.error_count.saturating_add(1);
        }
        word.status = self.mastery_rule().classify_word(&word);
        word.updated_at = now;

        let mut day = self.day_stats(self.study_day(now))?;
        day.reviewed_count = day.reviewed_count.saturating_add(1);
        if is_correct {
            day.correct_count = day.correct_count.saturating_add(1);
        }
        if previous != WordStatus::Mastered && word.status == WordStatus::Mastered {
            day.mastered_count = day.mastered_count.saturating_add(1);
        }
        if seconds.is_finite() && seconds > 0.0 {
            day.total_time += seconds;
        }

        self.repo.commit_review(&word, &record, &day)?;

        tracing::info!(
            word_id = %word_id,
            is_correct,
            error_type = ?record.error_type,
            from = ?previous,
            to = ?word.status,
            "review recorded"
        );
        Ok(record)
    }

    /// Grade typed input against the word's english text, then record it.
    pub fn record_typed_answer(
        &self,
        word_id: Uuid,
        typed: &str,
        error_types: &[SpellingErrorType],
    ) -> Result<TypedReview> {
        let word = self
            .repo
            .get_word(word_id)
            .or_access()?
            .ok_or(EngineError::NotFound(word_id))?;

        let check = check_answer(typed, &word.english);
        let record = self.record_review(word_id, check.is_correct, error_types)?;
        Ok(TypedReview { check, record })
    }

    /// Record self-reported outcomes for a batch session.
    ///
    /// `results` is keyed by english text. Session words without an entry are
    /// left unreviewed. Each entry is recorded on its own; a failure is
    /// reported and the remaining entries are still attempted.
    pub fn save_batch_results(
        &self,
        session: &[Word],
        results: &HashMap<String, bool>,
    ) -> BatchResult {
        let mut outcome = BatchResult::default();

        for word in session {
            let Some(&is_correct) = results.get(&word.english) else {
                continue;
            };

            match self.record_review(word.id, is_correct, &[]) {
                Ok(record) => outcome.succeeded.push(record),
                Err(error) => {
                    tracing::warn!(word_id = %word.id, english = %word.english, %error, "batch entry failed");
                    outcome.failed.push(BatchFailure {
                        word_id: word.id,
                        english: word.english.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            "batch results saved"
        );
        outcome
    }
}
