//! Trading-day safety classification.
//!
//! Pure functions of (reference date, market calendar). Weekends take
//! precedence over any calendar entry; a weekday with no entry is `clear`.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{AlertKind, MarketAlertEntry, MarketCalendar};

/// Default forward-scan horizon, in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Mutually exclusive trading-safety status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradingStatus {
    Weekend,
    Closed,
    Danger,
    Warning,
    Nfp,
    Fomc,
    Safe,
    Clear,
}

/// Classification result for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: TradingStatus,
    pub title: String,
    pub message: String,
}

/// The next day considered safe enough to trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextSafeDay {
    pub date: NaiveDate,
    /// Whole days between the reference date and `date`
    pub days_away: u32,
    /// The day itself is an NFP release (tradeable with caution)
    pub nfp: bool,
    /// The day itself is an FOMC decision day (tradeable with caution)
    pub fomc: bool,
}

/// A calendar entry ahead of the reference date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingAlert {
    pub date: NaiveDate,
    pub days_away: u32,
    #[serde(flatten)]
    pub entry: MarketAlertEntry,
}

/// Classifier over a static market calendar.
#[derive(Debug, Clone)]
pub struct SafetyClassifier {
    /// Forward-scan horizon for next-safe-day and upcoming alerts
    pub horizon_days: u32,
}

impl Default for SafetyClassifier {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl SafetyClassifier {
    /// Create a classifier with the default horizon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with a custom horizon.
    pub fn with_horizon(horizon_days: u32) -> Self {
        Self { horizon_days }
    }

    /// Classify the reference day.
    ///
    /// Saturday and Sunday are `weekend` regardless of calendar entries.
    /// A weekday maps its entry's kind straight to a status; no entry, or
    /// an unrecognized kind, is `clear`.
    pub fn classify(&self, reference: NaiveDate, calendar: &MarketCalendar) -> StatusReport {
        if is_weekend(reference) {
            return StatusReport {
                status: TradingStatus::Weekend,
                title: "Market Closed".to_string(),
                message: "It's the weekend. Markets are closed, rest and review.".to_string(),
            };
        }

        match calendar.get(reference) {
            Some(entry) => match status_for(entry.kind) {
                Some(status) => StatusReport {
                    status,
                    title: entry.label.clone(),
                    message: entry.description.clone(),
                },
                None => clear_report(),
            },
            None => clear_report(),
        }
    }

    /// First qualifying day after `reference`, within the horizon.
    ///
    /// A day qualifies when it is a weekday and its entry, if present, is
    /// one of safe/nfp/fomc. Release days qualify so the caller can still
    /// surface a caveat via the `nfp`/`fomc` flags. `None` when the horizon
    /// is exhausted; that is a normal outcome, not an error.
    pub fn next_safe_day(
        &self,
        reference: NaiveDate,
        calendar: &MarketCalendar,
    ) -> Option<NextSafeDay> {
        (1..=self.horizon_days).find_map(|offset| {
            let date = reference + Duration::days(i64::from(offset));
            if is_weekend(date) {
                return None;
            }

            let entry = calendar.get(date);
            let qualifies = match entry {
                None => true,
                Some(entry) => {
                    matches!(entry.kind, AlertKind::Safe | AlertKind::Nfp | AlertKind::Fomc)
                }
            };
            if !qualifies {
                return None;
            }

            Some(NextSafeDay {
                date,
                days_away: offset,
                nfp: entry.map_or(false, |entry| entry.kind == AlertKind::Nfp),
                fomc: entry.map_or(false, |entry| entry.kind == AlertKind::Fomc),
            })
        })
    }

    /// Calendar entries in `(reference, reference + horizon]`, ascending
    /// by date, each annotated with how many days away it is.
    pub fn upcoming_alerts(
        &self,
        reference: NaiveDate,
        calendar: &MarketCalendar,
    ) -> Vec<UpcomingAlert> {
        let through = reference + Duration::days(i64::from(self.horizon_days));
        calendar
            .range_after(reference, through)
            .map(|(date, entry)| UpcomingAlert {
                date,
                days_away: (date - reference).num_days() as u32,
                entry: entry.clone(),
            })
            .collect()
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn status_for(kind: AlertKind) -> Option<TradingStatus> {
    match kind {
        AlertKind::Closed => Some(TradingStatus::Closed),
        AlertKind::Danger => Some(TradingStatus::Danger),
        AlertKind::Warning => Some(TradingStatus::Warning),
        AlertKind::Nfp => Some(TradingStatus::Nfp),
        AlertKind::Fomc => Some(TradingStatus::Fomc),
        AlertKind::Safe => Some(TradingStatus::Safe),
        AlertKind::Unknown => None,
    }
}

fn clear_report() -> StatusReport {
    StatusReport {
        status: TradingStatus::Clear,
        title: "No Alerts".to_string(),
        message: "No scheduled events today. Trade your plan.".to_string(),
    }
}
