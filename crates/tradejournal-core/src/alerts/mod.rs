//! Market-alert calendar: static reference data for the safety classifier.
//!
//! The calendar maps days to alert entries (closures, high-impact
//! releases, explicit safe/danger marks). It is loaded once at startup,
//! either from a TOML file or from the built-in table, and never mutated
//! afterwards; the classifier takes it by shared reference.

pub mod classifier;

pub use classifier::{
    NextSafeDay, SafetyClassifier, StatusReport, TradingStatus, UpcomingAlert,
    DEFAULT_HORIZON_DAYS,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound;
use std::path::Path;

use crate::error::CalendarError;

/// Kind of market alert attached to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Market closed (holiday)
    Closed,
    /// Do not trade
    Danger,
    /// Trade with caution
    Warning,
    /// Non-farm payrolls release
    Nfp,
    /// FOMC decision day
    Fomc,
    /// Explicitly marked safe
    Safe,
    /// Unrecognized kind in config; classifies as clear
    #[serde(other)]
    Unknown,
}

/// One market-alert calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketAlertEntry {
    pub kind: AlertKind,
    pub label: String,
    pub description: String,
}

/// Date-keyed market-alert calendar.
#[derive(Debug, Clone, Default)]
pub struct MarketCalendar {
    entries: BTreeMap<NaiveDate, MarketAlertEntry>,
}

/// TOML schema for a user calendar file: an `[[alerts]]` array of tables
/// with `date` (quoted YYYY-MM-DD), `kind`, `label`, `description`.
#[derive(Debug, Deserialize)]
struct CalendarFile {
    #[serde(default)]
    alerts: Vec<CalendarRow>,
}

#[derive(Debug, Deserialize)]
struct CalendarRow {
    date: NaiveDate,
    kind: AlertKind,
    label: String,
    #[serde(default)]
    description: String,
}

impl MarketCalendar {
    /// Build a calendar from (date, entry) rows.
    ///
    /// Duplicate dates are rejected so a typo'd config fails at load time
    /// instead of silently dropping an alert.
    pub fn from_entries<I>(rows: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = (NaiveDate, MarketAlertEntry)>,
    {
        let mut entries = BTreeMap::new();
        for (date, entry) in rows {
            if entries.insert(date, entry).is_some() {
                return Err(CalendarError::DuplicateDate(date));
            }
        }
        Ok(Self { entries })
    }

    /// Load a calendar from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CalendarError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CalendarFile =
            toml::from_str(&raw).map_err(|err| CalendarError::ParseFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;

        Self::from_entries(file.alerts.into_iter().map(|row| {
            (
                row.date,
                MarketAlertEntry {
                    kind: row.kind,
                    label: row.label,
                    description: row.description,
                },
            )
        }))
    }

    /// Entry for a given day, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&MarketAlertEntry> {
        self.entries.get(&date)
    }

    /// Entries with dates in `(after, through]`, ascending by date.
    pub fn range_after(
        &self,
        after: NaiveDate,
        through: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, &MarketAlertEntry)> + '_ {
        self.entries
            .range((Bound::Excluded(after), Bound::Included(through)))
            .map(|(date, entry)| (*date, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Built-in calendar for 2026: US market holidays as `closed`,
    /// first-Friday NFP release dates as `nfp`, FOMC decision days as
    /// `fomc`. Holidays win when a release lands on a closure date.
    pub fn builtin() -> Self {
        // Observed US market holiday dates for 2026.
        const HOLIDAYS: &[(u32, u32, &str)] = &[
            (1, 1, "New Year's Day"),
            (1, 19, "Martin Luther King Jr. Day"),
            (2, 16, "Presidents' Day"),
            (4, 3, "Good Friday"),
            (5, 25, "Memorial Day"),
            (6, 19, "Juneteenth"),
            (7, 3, "Independence Day (observed)"),
            (9, 7, "Labor Day"),
            (11, 26, "Thanksgiving"),
            (12, 25, "Christmas Day"),
        ];
        // First Friday of each month.
        const NFP: &[(u32, u32)] = &[
            (1, 2),
            (2, 6),
            (3, 6),
            (4, 3),
            (5, 1),
            (6, 5),
            (7, 3),
            (8, 7),
            (9, 4),
            (10, 2),
            (11, 6),
            (12, 4),
        ];
        // Second day of each scheduled two-day FOMC meeting.
        const FOMC: &[(u32, u32)] = &[
            (1, 28),
            (3, 18),
            (4, 29),
            (6, 17),
            (7, 29),
            (9, 16),
            (10, 28),
            (12, 9),
        ];

        let mut entries = BTreeMap::new();

        for &(month, day, label) in HOLIDAYS {
            if let Some(date) = NaiveDate::from_ymd_opt(2026, month, day) {
                entries.insert(
                    date,
                    MarketAlertEntry {
                        kind: AlertKind::Closed,
                        label: label.to_string(),
                        description: "US markets closed.".to_string(),
                    },
                );
            }
        }
        for &(month, day) in NFP {
            if let Some(date) = NaiveDate::from_ymd_opt(2026, month, day) {
                entries.entry(date).or_insert_with(|| MarketAlertEntry {
                    kind: AlertKind::Nfp,
                    label: "NFP Release".to_string(),
                    description: "Non-farm payrolls at 8:30 ET. Expect volatility around the print.".to_string(),
                });
            }
        }
        for &(month, day) in FOMC {
            if let Some(date) = NaiveDate::from_ymd_opt(2026, month, day) {
                entries.entry(date).or_insert_with(|| MarketAlertEntry {
                    kind: AlertKind::Fomc,
                    label: "FOMC Decision".to_string(),
                    description: "Rate decision at 14:00 ET. Size down into the statement.".to_string(),
                });
            }
        }

        Self { entries }
    }
}
