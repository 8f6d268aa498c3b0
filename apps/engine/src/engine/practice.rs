//! Practice set selection.

use super::Engine;
use crate::db::Repository;
use crate::error::{ReadResultExt, Result};
use rand::Rng;
use serde::Serialize;
use wordbook_core::matching::{check_answer, AnswerCheck};
use wordbook_core::selection::select_practice_set;
use wordbook_core::types::{PracticeMode, PracticeRange, Word};

/// Words picked for one practice round.
///
/// Held by the caller; dropping it abandons the session without side effects.
#[derive(Debug, Clone, Serialize)]
pub struct PracticeSession {
    pub mode: PracticeMode,
    pub range: PracticeRange,
    pub words: Vec<Word>,
}

impl PracticeSession {
    /// Grade typed answers positionally against the session words.
    ///
    /// Missing answers count as empty input.
    pub fn check_answers(&self, answers: &[String]) -> Vec<AnswerCheck> {
        self.words
            .iter()
            .enumerate()
            .map(|(idx, word)| {
                let typed = answers.get(idx).map(String::as_str).unwrap_or("");
                check_answer(typed, &word.english)
            })
            .collect()
    }
}

impl<R: Repository> Engine<R> {
    /// Up to `count` words in `range`, shuffled.
    pub fn select_practice_set(&self, count: usize, range: PracticeRange) -> Result<Vec<Word>> {
        self.select_practice_set_with(count, range, &mut rand::thread_rng())
    }

    /// As `select_practice_set`, with a caller-supplied random source.
    pub fn select_practice_set_with<G: Rng + ?Sized>(
        &self,
        count: usize,
        range: PracticeRange,
        rng: &mut G,
    ) -> Result<Vec<Word>> {
        let candidates = self.repo.find_words(range).or_access()?;
        let available = candidates.len();
        let picked = select_practice_set(candidates, count, range, rng);

        tracing::debug!(
            range = range.as_str(),
            requested = count,
            available,
            picked = picked.len(),
            "practice set selected"
        );
        Ok(picked)
    }

    /// Select words and wrap them in a session for `mode`.
    pub fn start_session(
        &self,
        mode: PracticeMode,
        count: usize,
        range: PracticeRange,
    ) -> Result<PracticeSession> {
        let words = self.select_practice_set(count, range)?;
        Ok(PracticeSession { mode, range, words })
    }
}
