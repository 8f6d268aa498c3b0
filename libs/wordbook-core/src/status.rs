//! Mastery status classification.
//!
//! Status is derived from a word's counters: a word is Mastered once it has
//! at least `min_reviews` reviews and its accuracy strictly exceeds
//! `accuracy_threshold`; any reviewed word below that is Learning. Unlearned
//! only describes a word that has never been reviewed, and the classifier
//! never returns it.

use crate::types::{EngineSettings, Word, WordStatus};

/// Counter-based mastery rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasteryRule {
    pub min_reviews: u32,
    pub accuracy_threshold: f64,
}

impl Default for MasteryRule {
    fn default() -> Self {
        Self {
            min_reviews: 5,
            accuracy_threshold: 0.8,
        }
    }
}

impl From<&EngineSettings> for MasteryRule {
    fn from(settings: &EngineSettings) -> Self {
        Self {
            min_reviews: settings.mastery_min_reviews,
            accuracy_threshold: settings.mastery_accuracy_threshold,
        }
    }
}

impl MasteryRule {
    /// Classify from raw counters.
    pub fn classify(&self, review_count: u32, correct_count: u32) -> WordStatus {
        if review_count == 0 || review_count < self.min_reviews {
            return WordStatus::Learning;
        }

        let accuracy = f64::from(correct_count) / f64::from(review_count);
        if accuracy > self.accuracy_threshold {
            WordStatus::Mastered
        } else {
            WordStatus::Learning
        }
    }

    /// Classify a word from its current counters.
    pub fn classify_word(&self, word: &Word) -> WordStatus {
        self.classify(word.review_count, word.correct_count)
    }
}

/// Classify with the default rule.
pub fn classify(review_count: u32, correct_count: u32) -> WordStatus {
    MasteryRule::default().classify(review_count, correct_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_of_five_is_mastered() {
        assert_eq!(classify(5, 5), WordStatus::Mastered);
    }

    #[test]
    fn three_of_five_is_learning() {
        assert_eq!(classify(5, 3), WordStatus::Learning);
    }

    #[test]
    fn threshold_is_strict() {
        // 4/5 = 0.8 exactly, not above
        assert_eq!(classify(5, 4), WordStatus::Learning);
        // 9/10 = 0.9
        assert_eq!(classify(10, 9), WordStatus::Mastered);
    }

    #[test]
    fn too_few_reviews_is_learning() {
        assert_eq!(classify(4, 4), WordStatus::Learning);
        assert_eq!(classify(1, 1), WordStatus::Learning);
    }

    #[test]
    fn zero_reviews_defaults_to_learning() {
        assert_eq!(classify(0, 0), WordStatus::Learning);
    }

    #[test]
    fn mastered_word_regresses_when_accuracy_drops() {
        let rule = MasteryRule::default();
        assert_eq!(rule.classify(5, 5), WordStatus::Mastered);
        // Two misses: 5/7 ~ 0.71
        assert_eq!(rule.classify(7, 5), WordStatus::Learning);
    }

    #[test]
    fn rule_follows_settings() {
        let settings = EngineSettings {
            mastery_min_reviews: 2,
            mastery_accuracy_threshold: 0.5,
            ..Default::default()
        };
        let rule = MasteryRule::from(&settings);
        assert_eq!(rule.classify(2, 2), WordStatus::Mastered);
        assert_eq!(rule.classify(2, 1), WordStatus::Learning);
    }

    #[test]
    fn classification_is_deterministic() {
        let rule = MasteryRule::default();
        for reviews in 0..12 {
            for correct in 0..=reviews {
                assert_eq!(rule.classify(reviews, correct), rule.classify(reviews, correct));
            }
        }
    }
}
