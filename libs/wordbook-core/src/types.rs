//! Core types for the vocabulary tracker.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ValidationError};
use crate::spelling::SpellingErrorType;

/// Word mastery status.
///
/// Derived from review counters; never set directly by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordStatus {
    Unlearned,
    Learning,
    Mastered,
}

impl Default for WordStatus {
    fn default() -> Self {
        Self::Unlearned
    }
}

impl WordStatus {
    /// Stored numeric code (0-2).
    pub fn to_value(self) -> i16 {
        match self {
            Self::Unlearned => 0,
            Self::Learning => 1,
            Self::Mastered => 2,
        }
    }

    /// Create from stored numeric code.
    pub fn from_value(value: i16) -> Option<Self> {
        match value {
            0 => Some(Self::Unlearned),
            1 => Some(Self::Learning),
            2 => Some(Self::Mastered),
            _ => None,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unlearned => "未学习",
            Self::Learning => "学习中",
            Self::Mastered => "已掌握",
        }
    }
}

/// Editable text fields of a word.
///
/// Optional fields use the empty string for "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFields {
    pub english: String,
    pub chinese: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub etymology: String,
    #[serde(default)]
    pub structure: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub example_translation: String,
    #[serde(default)]
    pub memory_tips: String,
}

impl WordFields {
    /// Create fields with only the required values set.
    pub fn new(english: impl Into<String>, chinese: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            chinese: chinese.into(),
            ..Default::default()
        }
    }

    /// Check that the required fields are present.
    pub fn validate(&self) -> Result<()> {
        if self.english.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "english" });
        }
        if self.chinese.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "chinese" });
        }
        Ok(())
    }
}

/// A vocabulary entry with its learning counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: Uuid,
    pub english: String,
    pub chinese: String,
    pub phonetic: String,
    pub etymology: String,
    pub structure: String,
    pub example: String,
    pub example_translation: String,
    pub memory_tips: String,
    pub review_count: u32,
    pub correct_count: u32,
    pub error_count: u32,
    pub status: WordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Word {
    /// Create an unreviewed word with a fresh id.
    pub fn new(fields: WordFields, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            english: fields.english,
            chinese: fields.chinese,
            phonetic: fields.phonetic,
            etymology: fields.etymology,
            structure: fields.structure,
            example: fields.example,
            example_translation: fields.example_translation,
            memory_tips: fields.memory_tips,
            review_count: 0,
            correct_count: 0,
            error_count: 0,
            status: WordStatus::Unlearned,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the text fields, leaving id, counters and status untouched.
    pub fn apply_fields(&mut self, fields: WordFields, now: DateTime<Utc>) {
        self.english = fields.english;
        self.chinese = fields.chinese;
        self.phonetic = fields.phonetic;
        self.etymology = fields.etymology;
        self.structure = fields.structure;
        self.example = fields.example;
        self.example_translation = fields.example_translation;
        self.memory_tips = fields.memory_tips;
        self.updated_at = now;
    }

    /// Current text fields.
    pub fn fields(&self) -> WordFields {
        WordFields {
            english: self.english.clone(),
            chinese: self.chinese.clone(),
            phonetic: self.phonetic.clone(),
            etymology: self.etymology.clone(),
            structure: self.structure.clone(),
            example: self.example.clone(),
            example_translation: self.example_translation.clone(),
            memory_tips: self.memory_tips.clone(),
        }
    }
}

/// One practice attempt outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub word_id: Uuid,
    pub review_date: DateTime<Utc>,
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<SpellingErrorType>,
    /// Reserved; not computed.
    pub memory_strength: f64,
    /// Reserved; not computed.
    pub review_interval: f64,
}

impl ReviewRecord {
    /// Create a record for `word_id`.
    ///
    /// Only the first error type is retained, and none when the answer was correct.
    pub fn new(
        word_id: Uuid,
        is_correct: bool,
        error_types: &[SpellingErrorType],
        now: DateTime<Utc>,
    ) -> Self {
        let error_type = if is_correct {
            None
        } else {
            SpellingErrorType::primary(error_types)
        };

        Self {
            id: Uuid::new_v4(),
            word_id,
            review_date: now,
            is_correct,
            error_type,
            memory_strength: 0.0,
            review_interval: 0.0,
        }
    }
}

/// Daily learning aggregate. One per calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningStats {
    pub date: NaiveDate,
    pub new_words_count: u32,
    pub reviewed_count: u32,
    pub correct_count: u32,
    pub mastered_count: u32,
    /// Seconds spent.
    pub total_time: f64,
}

impl LearningStats {
    /// Zeroed stats for `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            new_words_count: 0,
            reviewed_count: 0,
            correct_count: 0,
            mastered_count: 0,
            total_time: 0.0,
        }
    }
}

/// Range filter for building a practice set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeRange {
    All,
    PendingReview,
    ErrorProne,
}

impl Default for PracticeRange {
    fn default() -> Self {
        Self::All
    }
}

impl PracticeRange {
    /// Get the range name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::PendingReview => "pending_review",
            Self::ErrorProne => "error_prone",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "pending_review" => Some(Self::PendingReview),
            "error_prone" => Some(Self::ErrorProne),
            _ => None,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "所有单词",
            Self::PendingReview => "待复习",
            Self::ErrorProne => "易错词",
        }
    }

    /// Whether `word` belongs to this range.
    pub fn matches(&self, word: &Word) -> bool {
        match self {
            Self::All => true,
            Self::PendingReview => word.status < WordStatus::Mastered,
            Self::ErrorProne => word.error_count > 0,
        }
    }
}

/// How a practice session is graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeMode {
    /// Caller self-reports correctness per word.
    Batch,
    /// Caller supplies typed input which is compared to the word.
    Single,
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub mastery_min_reviews: u32,
    /// Accuracy that must be strictly exceeded to reach Mastered.
    pub mastery_accuracy_threshold: f64,
    pub daily_reset_hour: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            mastery_min_reviews: 5,
            mastery_accuracy_threshold: 0.8,
            daily_reset_hour: 0,
        }
    }
}
