//! Answer checking for single-word practice.

use serde::{Deserialize, Serialize};

/// Result of comparing a typed answer to a word's english text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCheck {
    pub is_correct: bool,
    /// Typed answer as compared.
    pub typed_normalized: String,
    /// Expected answer as compared.
    pub expected_normalized: String,
}

/// Compare a typed answer to the expected english text.
///
/// Both sides are trimmed and lowercased; inner whitespace is kept as typed.
pub fn check_answer(typed: &str, expected: &str) -> AnswerCheck {
    let typed_normalized = normalize(typed);
    let expected_normalized = normalize(expected);

    AnswerCheck {
        is_correct: typed_normalized == expected_normalized,
        typed_normalized,
        expected_normalized,
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_correct() {
        let result = check_answer("apple", "apple");
        assert!(result.is_correct);
        assert_eq!(result.expected_normalized, "apple");
    }

    #[test]
    fn case_is_ignored() {
        assert!(check_answer("Apple", "apple").is_correct);
        assert!(check_answer("apple", "APPLE").is_correct);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let result = check_answer("  apple \n", "apple");
        assert!(result.is_correct);
        assert_eq!(result.typed_normalized, "apple");
    }

    #[test]
    fn inner_whitespace_matters() {
        assert!(!check_answer("ice  cream", "ice cream").is_correct);
        assert!(check_answer("Ice cream", "ice cream").is_correct);
    }

    #[test]
    fn misspelling_is_wrong() {
        let result = check_answer("aple", "apple");
        assert!(!result.is_correct);
        assert_eq!(result.typed_normalized, "aple");
    }

    #[test]
    fn empty_answer_is_wrong() {
        assert!(!check_answer("", "apple").is_correct);
        assert!(!check_answer("   ", "apple").is_correct);
    }

    #[test]
    fn non_ascii_answers_compare_by_text() {
        assert!(check_answer("Café", "café").is_correct);
        assert!(!check_answer("cafe", "café").is_correct);
    }
}
