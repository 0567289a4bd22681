//! # Tradejournal Core Library
//!
//! This library provides the core business logic for the tradejournal
//! trading journal. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary over this library.
//!
//! ## Architecture
//!
//! - **Habit Analytics**: a pure completion index computing streaks,
//!   rolling completion rates, and day/week aggregates
//! - **Safety Classifier**: trading-day status classification and forward
//!   scans over a static market-alert calendar
//! - **Storage**: JSON snapshot of habit documents plus TOML-based
//!   calendar configuration
//!
//! Both engines take the reference date as an explicit parameter and never
//! read the system clock: identical inputs always produce identical
//! outputs, and concurrent use is safe since nothing is mutated.
//!
//! ## Key Components
//!
//! - [`HabitAnalytics`]: completion index over a record snapshot
//! - [`SafetyClassifier`]: status classification and next-safe-day scans
//! - [`MarketCalendar`]: date-keyed market-event reference data
//! - [`JournalSnapshot`]: local persistence for habits and completions

pub mod alerts;
pub mod error;
pub mod habit;
pub mod storage;

pub use alerts::{
    AlertKind, MarketAlertEntry, MarketCalendar, NextSafeDay, SafetyClassifier, StatusReport,
    TradingStatus, UpcomingAlert, DEFAULT_HORIZON_DAYS,
};
pub use error::{CalendarError, CoreError, StoreError, ValidationError};
pub use habit::{
    week_of, CompletionRecord, HabitAnalytics, HabitCategory, HabitDefinition, HabitRow,
    HabitStatsReport, HabitSummary, SkippedRecord, DEFAULT_LOOKBACK_DAYS,
};
pub use storage::{data_dir, JournalSnapshot};
