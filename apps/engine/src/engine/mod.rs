//! The learning-progress engine.
//!
//! `Engine` owns an injected repository and is the only path that mutates
//! words, review records and daily statistics, so the counter and status
//! rules always hold. Each mutating operation is one repository transaction.

mod import;
mod ledger;
mod practice;
mod stats;
mod words;

pub use import::ImportResult;
pub use ledger::{BatchFailure, BatchResult, TypedReview};
pub use practice::PracticeSession;
pub use stats::{
    DayStats, DerivedStats, StatsTarget, StudySummary, WordStats, MAX_CALENDAR_DAYS,
};

use crate::db::date_utils::study_day;
use crate::db::Repository;
use crate::error::{ReadResultExt, Result};
use chrono::{DateTime, NaiveDate, Utc};
use wordbook_core::types::{EngineSettings, LearningStats};
use wordbook_core::MasteryRule;

/// Engine bound to a repository.
pub struct Engine<R> {
    repo: R,
    settings: EngineSettings,
}

impl<R: Repository> Engine<R> {
    /// Build an engine, loading settings from the repository.
    pub fn new(repo: R) -> Result<Self> {
        let settings = repo.get_settings().or_access()?;
        Ok(Self { repo, settings })
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Persist new settings and use them from now on.
    pub fn save_settings(&mut self, settings: EngineSettings) -> Result<()> {
        self.repo.save_settings(&settings)?;
        tracing::info!(?settings, "settings updated");
        self.settings = settings;
        Ok(())
    }

    fn mastery_rule(&self) -> MasteryRule {
        MasteryRule::from(&self.settings)
    }

    fn study_day(&self, at: DateTime<Utc>) -> NaiveDate {
        study_day(at, self.settings.daily_reset_hour)
    }

    /// Stored stats for `date`, or a zeroed record.
    fn day_stats(&self, date: NaiveDate) -> Result<LearningStats> {
        Ok(self
            .repo
            .get_daily_stats(date)
            .or_access()?
            .unwrap_or_else(|| LearningStats::empty(date)))
    }
}
