//! Practice set selection.

use crate::types::{PracticeRange, Word};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick up to `count` words in `range`, in uniformly random order.
///
/// Returns every matching word when fewer than `count` exist.
pub fn select_practice_set<R: Rng + ?Sized>(
    words: Vec<Word>,
    count: usize,
    range: PracticeRange,
    rng: &mut R,
) -> Vec<Word> {
    let mut candidates: Vec<Word> = words.into_iter().filter(|w| range.matches(w)).collect();
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{WordFields, WordStatus};
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn words() -> Vec<Word> {
        let now = Utc::now();
        (0..8)
            .map(|i| {
                let mut word = Word::new(WordFields::new(format!("word{i}"), "词"), now);
                word.error_count = if i < 3 { 1 } else { 0 };
                word.status = if i >= 6 { WordStatus::Mastered } else { WordStatus::Learning };
                word
            })
            .collect()
    }

    #[test]
    fn error_prone_returns_all_candidates_when_short() {
        let pool = words();
        let expected: HashSet<_> = pool.iter().filter(|w| w.error_count > 0).map(|w| w.id).collect();

        let mut rng = StdRng::seed_from_u64(7);
        let picked = select_practice_set(pool, 10, PracticeRange::ErrorProne, &mut rng);

        assert_eq!(picked.len(), 3);
        let ids: HashSet<_> = picked.iter().map(|w| w.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn truncates_to_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = select_practice_set(words(), 4, PracticeRange::All, &mut rng);
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn pending_review_excludes_mastered() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = select_practice_set(words(), 100, PracticeRange::PendingReview, &mut rng);
        assert_eq!(picked.len(), 6);
        assert!(picked.iter().all(|w| w.status != WordStatus::Mastered));
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(select_practice_set(words(), 0, PracticeRange::All, &mut rng).is_empty());
    }

    #[test]
    fn order_is_shuffled() {
        let pool = words();
        let original: Vec<_> = pool.iter().map(|w| w.id).collect();

        // Some seed in this range must produce a different order.
        let reordered = (0..20u64).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_practice_set(pool.clone(), 8, PracticeRange::All, &mut rng);
            picked.iter().map(|w| w.id).collect::<Vec<_>>() != original
        });
        assert!(reordered);
    }
}
