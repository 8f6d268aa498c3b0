//! Study-day bucketing for daily statistics.

use chrono::{DateTime, Duration, Local, NaiveDate, Timelike, Utc};

/// The study day `at` falls on, in local time.
///
/// Before `daily_reset_hour` the study day is still the previous calendar
/// day, so late-night practice counts towards the day it started on.
pub fn study_day(at: DateTime<Utc>, daily_reset_hour: u32) -> NaiveDate {
    let local = at.with_timezone(&Local);

    if local.hour() < daily_reset_hour {
        (local - Duration::days(1)).date_naive()
    } else {
        local.date_naive()
    }
}

/// The current study day.
pub fn study_today(daily_reset_hour: u32) -> NaiveDate {
    study_day(Utc::now(), daily_reset_hour)
}
