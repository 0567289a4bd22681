//! Habit analytics: streaks, completion rates, and day/week aggregates.
//!
//! The engine is a pure computation over a snapshot of completion records.
//! It derives three kinds of values per habit:
//! - **Current streak**: consecutive completed days ending today or yesterday
//! - **Completion rate**: completions over a rolling lookback window
//! - **Aggregates**: whole-journal day and week statistics
//!
//! Records whose date fails to parse are excluded and reported rather than
//! aborting the calculation; every zero-denominator rate is 0.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{parse_day, CompletionRecord, HabitCategory, HabitDefinition};

/// Default lookback window for completion rates, in days.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;

/// A completion record that was excluded from analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub habit_id: String,
    /// The raw date value as it appeared in the record
    pub date: String,
    pub reason: String,
}

/// Aggregate day/week statistics across all habits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitSummary {
    /// Habits completed on the reference date
    pub completed_today: u32,
    /// Total tracked habits
    pub total_habits: u32,
    /// completed_today over total_habits, integer percent (0 when no habits)
    pub today_rate: u8,
    /// Longest current streak across all habits
    pub best_streak: u32,
    /// Completions over the habits x week-dates cross product
    pub week_completions: u32,
    /// week_completions over (habits * 7), integer percent
    pub week_rate: u8,
}

/// Per-habit line in a stats report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitRow {
    pub id: String,
    pub name: String,
    pub category: HabitCategory,
    pub completed_today: bool,
    pub current_streak: u32,
    pub completion_rate: u8,
}

/// Full stats report: aggregate summary plus one row per habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitStatsReport {
    pub summary: HabitSummary,
    pub habits: Vec<HabitRow>,
    /// Records excluded because their date did not parse
    pub skipped: Vec<SkippedRecord>,
}

/// Completion index over a snapshot of records.
///
/// Built once per dataset; all queries are pure. Duplicate records for one
/// (habit, day) collapse to a single entry, matching the journal's toggle
/// semantics (toggling off removes every record for the pair).
#[derive(Debug, Clone)]
pub struct HabitAnalytics {
    completed: HashMap<String, HashSet<NaiveDate>>,
    skipped: Vec<SkippedRecord>,
}

impl HabitAnalytics {
    /// Index a snapshot of completion records.
    ///
    /// Records whose date fails to parse are excluded and reported via
    /// [`skipped`](Self::skipped); analysis proceeds on the valid subset.
    pub fn new(records: &[CompletionRecord]) -> Self {
        let mut completed: HashMap<String, HashSet<NaiveDate>> = HashMap::new();
        let mut skipped = Vec::new();

        for record in records {
            match parse_day(&record.date) {
                Ok(date) => {
                    completed
                        .entry(record.habit_id.clone())
                        .or_default()
                        .insert(date);
                }
                Err(err) => skipped.push(SkippedRecord {
                    habit_id: record.habit_id.clone(),
                    date: record.date.clone(),
                    reason: err.to_string(),
                }),
            }
        }

        Self { completed, skipped }
    }

    /// Records excluded during indexing.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    /// True iff at least one record marks `habit_id` completed on `date`.
    pub fn is_completed(&self, habit_id: &str, date: NaiveDate) -> bool {
        self.completed
            .get(habit_id)
            .map_or(false, |days| days.contains(&date))
    }

    /// Consecutive completed days ending at the reference date.
    ///
    /// A habit not yet completed today still keeps the streak it earned
    /// through yesterday; the chain only breaks once a full day has passed
    /// without a completion. The walk anchors at the reference date when
    /// completed, otherwise at the day before, then steps backward until
    /// the first gap.
    pub fn current_streak(&self, habit_id: &str, reference: NaiveDate) -> u32 {
        let days = match self.completed.get(habit_id) {
            Some(days) => days,
            None => return 0,
        };

        let yesterday = reference - Duration::days(1);
        let mut cursor = if days.contains(&reference) {
            reference
        } else if days.contains(&yesterday) {
            yesterday
        } else {
            return 0;
        };

        let mut streak = 0;
        while days.contains(&cursor) {
            streak += 1;
            cursor = cursor - Duration::days(1);
        }
        streak
    }

    /// Completion rate over `[reference - window_days, reference]`, as an
    /// integer percent of `window_days`.
    ///
    /// Days before the habit existed still count as misses; the window is
    /// not capped at the habit's creation date. The inclusive window can
    /// hold `window_days + 1` completions, so the result clamps at 100.
    pub fn completion_rate(&self, habit_id: &str, reference: NaiveDate, window_days: u32) -> u8 {
        if window_days == 0 {
            return 0;
        }
        let days = match self.completed.get(habit_id) {
            Some(days) => days,
            None => return 0,
        };

        let start = reference - Duration::days(i64::from(window_days));
        let hits = days
            .iter()
            .filter(|day| **day >= start && **day <= reference)
            .count();

        percent(hits as u32, window_days)
    }

    /// Aggregate day/week statistics.
    ///
    /// `week` is the caller-supplied Monday-to-Sunday sequence to sum
    /// completions over; [`week_of`] builds it from the reference date.
    pub fn aggregate(
        &self,
        habits: &[HabitDefinition],
        reference: NaiveDate,
        week: &[NaiveDate; 7],
    ) -> HabitSummary {
        let total_habits = habits.len() as u32;

        let completed_today = habits
            .iter()
            .filter(|habit| self.is_completed(&habit.id, reference))
            .count() as u32;

        let best_streak = habits
            .iter()
            .map(|habit| self.current_streak(&habit.id, reference))
            .max()
            .unwrap_or(0);

        let week_completions = habits
            .iter()
            .map(|habit| {
                week.iter()
                    .filter(|day| self.is_completed(&habit.id, **day))
                    .count() as u32
            })
            .sum();

        HabitSummary {
            completed_today,
            total_habits,
            today_rate: percent(completed_today, total_habits),
            best_streak,
            week_completions,
            week_rate: percent(week_completions, total_habits * 7),
        }
    }

    /// Build the full stats report for a dashboard view.
    pub fn stats_report(
        &self,
        habits: &[HabitDefinition],
        reference: NaiveDate,
        week: &[NaiveDate; 7],
        window_days: u32,
    ) -> HabitStatsReport {
        let rows = habits
            .iter()
            .map(|habit| HabitRow {
                id: habit.id.clone(),
                name: habit.name.clone(),
                category: habit.category,
                completed_today: self.is_completed(&habit.id, reference),
                current_streak: self.current_streak(&habit.id, reference),
                completion_rate: self.completion_rate(&habit.id, reference, window_days),
            })
            .collect();

        HabitStatsReport {
            summary: self.aggregate(habits, reference, week),
            habits: rows,
            skipped: self.skipped.clone(),
        }
    }
}

/// Monday-to-Sunday week containing `reference`.
pub fn week_of(reference: NaiveDate) -> [NaiveDate; 7] {
    let monday =
        reference - Duration::days(i64::from(reference.weekday().num_days_from_monday()));
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Integer percent, rounded to nearest, 0 when the denominator is 0,
/// clamped to 100.
fn percent(numerator: u32, denominator: u32) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let pct = (f64::from(numerator) * 100.0 / f64::from(denominator)).round();
    pct.min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn record(habit_id: &str, date: &str) -> CompletionRecord {
        CompletionRecord {
            id: format!("rec-{habit_id}-{date}"),
            habit_id: habit_id.to_string(),
            date: date.to_string(),
            created_at: Utc::now(),
        }
    }

    fn habit(id: &str, name: &str) -> HabitDefinition {
        HabitDefinition {
            id: id.to_string(),
            name: name.to_string(),
            category: HabitCategory::Mindset,
            icon: "target".to_string(),
            created_at: Utc::now(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn no_records_means_zero_streak() {
        let analytics = HabitAnalytics::new(&[]);
        assert_eq!(analytics.current_streak("h1", day("2024-06-03")), 0);
    }

    #[test]
    fn consecutive_run_counts_back_from_today() {
        let records: Vec<_> = ["2024-06-01", "2024-06-02", "2024-06-03"]
            .iter()
            .map(|d| record("h1", d))
            .collect();
        let analytics = HabitAnalytics::new(&records);

        assert_eq!(analytics.current_streak("h1", day("2024-06-03")), 3);
    }

    #[test]
    fn gap_bounds_the_streak() {
        // Completed 01..05 but not 2024-05-31: streak at the 5th is exactly 5.
        let records: Vec<_> = [
            "2024-05-29",
            "2024-06-01",
            "2024-06-02",
            "2024-06-03",
            "2024-06-04",
            "2024-06-05",
        ]
        .iter()
        .map(|d| record("h1", d))
        .collect();
        let analytics = HabitAnalytics::new(&records);

        assert_eq!(analytics.current_streak("h1", day("2024-06-05")), 5);
    }

    #[test]
    fn miss_today_keeps_yesterdays_streak() {
        let records: Vec<_> = [
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
            "2024-01-05",
        ]
        .iter()
        .map(|d| record("h1", d))
        .collect();
        let analytics = HabitAnalytics::new(&records);

        // Not completed on the 6th: the run through yesterday still counts.
        assert_eq!(analytics.current_streak("h1", day("2024-01-06")), 5);
        // Two days without a completion break the chain.
        assert_eq!(analytics.current_streak("h1", day("2024-01-07")), 0);
    }

    #[test]
    fn run_ending_yesterday_survives_gap_before_it() {
        // Missed the day before yesterday; completed yesterday only.
        let records = [record("h1", "2024-06-02")];
        let analytics = HabitAnalytics::new(&records);

        assert_eq!(analytics.current_streak("h1", day("2024-06-03")), 1);
    }

    #[test]
    fn duplicates_count_once() {
        let records = [
            record("h1", "2024-06-03"),
            record("h1", "2024-06-03"),
            record("h1", "2024-06-03"),
        ];
        let analytics = HabitAnalytics::new(&records);

        assert_eq!(analytics.current_streak("h1", day("2024-06-03")), 1);
        assert_eq!(analytics.completion_rate("h1", day("2024-06-03"), 30), 3);
    }

    #[test]
    fn invalid_dates_are_skipped_and_reported() {
        let records = [
            record("h1", "2024-06-03"),
            record("h1", "not-a-date"),
            record("h1", "2024-02-30"),
        ];
        let analytics = HabitAnalytics::new(&records);

        assert_eq!(analytics.skipped().len(), 2);
        assert_eq!(analytics.skipped()[0].date, "not-a-date");
        assert_eq!(analytics.current_streak("h1", day("2024-06-03")), 1);
    }

    #[test]
    fn completion_rate_handles_degenerate_windows() {
        let records = [record("h1", "2024-06-03")];
        let analytics = HabitAnalytics::new(&records);

        assert_eq!(analytics.completion_rate("h1", day("2024-06-03"), 0), 0);
        assert_eq!(analytics.completion_rate("missing", day("2024-06-03"), 30), 0);
    }

    #[test]
    fn completion_rate_rounds_to_nearest_percent() {
        let records: Vec<_> = (1..=5)
            .map(|i| record("h1", &format!("2024-06-{i:02}")))
            .collect();
        let analytics = HabitAnalytics::new(&records);

        // 5 completions in a 30-day window: 16.67 -> 17.
        assert_eq!(analytics.completion_rate("h1", day("2024-06-10"), 30), 17);
        // 5 of 7: 71.43 -> 71.
        assert_eq!(analytics.completion_rate("h1", day("2024-06-07"), 7), 71);
    }

    #[test]
    fn completion_rate_clamps_at_one_hundred() {
        // The inclusive window holds window + 1 days; a perfect run still
        // reports 100.
        let records: Vec<_> = (1..=8)
            .map(|i| record("h1", &format!("2024-06-{i:02}")))
            .collect();
        let analytics = HabitAnalytics::new(&records);

        assert_eq!(analytics.completion_rate("h1", day("2024-06-08"), 7), 100);
    }

    #[test]
    fn aggregate_on_empty_inputs_is_all_zero() {
        let analytics = HabitAnalytics::new(&[]);
        let reference = day("2024-06-03");
        let summary = analytics.aggregate(&[], reference, &week_of(reference));

        assert_eq!(summary, HabitSummary::default());
    }

    #[test]
    fn aggregate_counts_day_and_week() {
        let habits = [habit("h1", "Journal trades"), habit("h2", "Morning review")];
        // h1 done Mon-Wed, h2 done Wed only. 2024-06-03 is a Monday.
        let records = [
            record("h1", "2024-06-03"),
            record("h1", "2024-06-04"),
            record("h1", "2024-06-05"),
            record("h2", "2024-06-05"),
        ];
        let analytics = HabitAnalytics::new(&records);
        let reference = day("2024-06-05");
        let summary = analytics.aggregate(&habits, reference, &week_of(reference));

        assert_eq!(summary.completed_today, 2);
        assert_eq!(summary.total_habits, 2);
        assert_eq!(summary.today_rate, 100);
        assert_eq!(summary.best_streak, 3);
        assert_eq!(summary.week_completions, 4);
        // 4 of 14: 28.57 -> 29.
        assert_eq!(summary.week_rate, 29);
    }

    #[test]
    fn stats_report_carries_rows_and_skips() {
        let habits = [habit("h1", "Journal trades")];
        let records = [record("h1", "2024-06-03"), record("h1", "garbage")];
        let analytics = HabitAnalytics::new(&records);
        let reference = day("2024-06-03");
        let report = analytics.stats_report(&habits, reference, &week_of(reference), 30);

        assert_eq!(report.habits.len(), 1);
        assert!(report.habits[0].completed_today);
        assert_eq!(report.habits[0].current_streak, 1);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn week_of_is_monday_to_sunday() {
        // 2024-06-05 is a Wednesday.
        let week = week_of(day("2024-06-05"));

        assert_eq!(week[0], day("2024-06-03"));
        assert_eq!(week[6], day("2024-06-09"));
        assert!(week.contains(&day("2024-06-05")));

        // A Monday reference starts its own week.
        assert_eq!(week_of(day("2024-06-03"))[0], day("2024-06-03"));
        // A Sunday reference ends it.
        assert_eq!(week_of(day("2024-06-09"))[6], day("2024-06-09"));
    }

    proptest! {
        /// The streak is positive exactly when today or yesterday is
        /// completed, and never exceeds the number of completed days.
        #[test]
        fn streak_anchor_invariants(completed in proptest::collection::vec(any::<bool>(), 0..30)) {
            let reference = day("2024-06-30");
            let records: Vec<CompletionRecord> = completed
                .iter()
                .enumerate()
                .filter(|(_, done)| **done)
                .map(|(offset, _)| {
                    record("h1", &(reference - Duration::days(offset as i64)).to_string())
                })
                .collect();

            let analytics = HabitAnalytics::new(&records);
            let streak = analytics.current_streak("h1", reference);

            let today = completed.first().copied().unwrap_or(false);
            let yesterday = completed.get(1).copied().unwrap_or(false);
            prop_assert_eq!(streak > 0, today || yesterday);
            prop_assert!(streak as usize <= completed.iter().filter(|done| **done).count());
        }
    }
}
