//! Habit definitions and completion records.
//!
//! One [`HabitDefinition`] per tracked routine, one [`CompletionRecord`]
//! per (habit, day) the user has checked off. Record dates stay in their
//! raw `YYYY-MM-DD` wire form; the analytics engine parses them and
//! reports malformed values instead of failing.

pub mod analytics;

pub use analytics::{
    week_of, HabitAnalytics, HabitRow, HabitStatsReport, HabitSummary, SkippedRecord,
    DEFAULT_LOOKBACK_DAYS,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Where in the trading day a habit belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HabitCategory {
    PreMarket,
    DuringTrade,
    PostMarket,
    Mindset,
    Health,
    Learning,
}

impl std::str::FromStr for HabitCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pre-market" => Ok(Self::PreMarket),
            "during-trade" => Ok(Self::DuringTrade),
            "post-market" => Ok(Self::PostMarket),
            "mindset" => Ok(Self::Mindset),
            "health" => Ok(Self::Health),
            "learning" => Ok(Self::Learning),
            other => Err(ValidationError::UnknownCategory {
                value: other.to_string(),
            }),
        }
    }
}

/// A tracked habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDefinition {
    pub id: String,
    pub name: String,
    pub category: HabitCategory,
    /// Display token only; carries no semantics
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

/// A single "habit done on this day" event.
///
/// At most one record per (habit, date) pair is meaningful; duplicates
/// are tolerated and collapse to "completed".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub id: String,
    pub habit_id: String,
    /// Day-granularity date key, YYYY-MM-DD
    pub date: String,
    pub created_at: DateTime<Utc>,
}

/// Parse a day-granularity `YYYY-MM-DD` date key.
pub fn parse_day(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        value: value.to_string(),
    })
}
