//! Spelling mistake taxonomy.
//!
//! A closed set of four categories with fixed codes and display labels.
//! Selections arriving from the UI as raw codes are validated here before
//! they reach the review ledger.

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Category of a spelling mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellingErrorType {
    Spelling,
    Morphology,
    Capitalization,
    Sequence,
}

impl SpellingErrorType {
    /// All categories in code order.
    pub const ALL: [SpellingErrorType; 4] = [
        Self::Spelling,
        Self::Morphology,
        Self::Capitalization,
        Self::Sequence,
    ];

    /// Stored numeric code (1-4).
    pub fn code(self) -> i16 {
        match self {
            Self::Spelling => 1,
            Self::Morphology => 2,
            Self::Capitalization => 3,
            Self::Sequence => 4,
        }
    }

    /// Create from stored numeric code.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Spelling),
            2 => Some(Self::Morphology),
            3 => Some(Self::Capitalization),
            4 => Some(Self::Sequence),
            _ => None,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Spelling => "拼写错误",
            Self::Morphology => "词形变化错误",
            Self::Capitalization => "大小写错误",
            Self::Sequence => "字母顺序错误",
        }
    }

    /// The (code, label) pairs for presentation.
    pub fn choices() -> Vec<(i16, &'static str)> {
        Self::ALL.iter().map(|t| (t.code(), t.label())).collect()
    }

    /// Validate a selection of raw codes.
    ///
    /// Order is preserved and duplicates are dropped. Any unknown code rejects
    /// the whole selection.
    pub fn parse_selection(codes: &[i16]) -> Result<Vec<Self>> {
        let mut selection = Vec::with_capacity(codes.len());
        for &code in codes {
            let error_type =
                Self::from_code(code).ok_or(ValidationError::UnknownErrorType { code })?;
            if !selection.contains(&error_type) {
                selection.push(error_type);
            }
        }
        Ok(selection)
    }

    /// The single category retained for a review.
    pub fn primary(selection: &[Self]) -> Option<Self> {
        selection.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(SpellingErrorType::Spelling.code(), 1);
        assert_eq!(SpellingErrorType::Morphology.code(), 2);
        assert_eq!(SpellingErrorType::Capitalization.code(), 3);
        assert_eq!(SpellingErrorType::Sequence.code(), 4);
    }

    #[test]
    fn from_code_rejects_out_of_range() {
        assert_eq!(SpellingErrorType::from_code(0), None);
        assert_eq!(SpellingErrorType::from_code(5), None);
        assert_eq!(SpellingErrorType::from_code(-1), None);
    }

    #[test]
    fn choices_list_all_four() {
        let choices = SpellingErrorType::choices();
        assert_eq!(choices.len(), 4);
        assert_eq!(choices[0], (1, "拼写错误"));
        assert_eq!(choices[3], (4, "字母顺序错误"));
    }

    #[test]
    fn parse_selection_keeps_order_and_dedups() {
        let selection = SpellingErrorType::parse_selection(&[3, 1, 3]).unwrap();
        assert_eq!(
            selection,
            vec![SpellingErrorType::Capitalization, SpellingErrorType::Spelling]
        );
    }

    #[test]
    fn parse_selection_rejects_unknown_code() {
        let result = SpellingErrorType::parse_selection(&[1, 9]);
        assert_eq!(result, Err(ValidationError::UnknownErrorType { code: 9 }));
    }

    #[test]
    fn empty_selection_has_no_primary() {
        let selection = SpellingErrorType::parse_selection(&[]).unwrap();
        assert!(selection.is_empty());
        assert_eq!(SpellingErrorType::primary(&selection), None);
    }
}
