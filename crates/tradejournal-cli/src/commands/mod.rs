pub mod alerts;
pub mod habit;

use chrono::{NaiveDate, Utc};
use std::path::PathBuf;

use tradejournal_core::MarketCalendar;

/// Resolve a `--date` argument, defaulting to today (UTC).
///
/// The core engines never read the clock; the default lives here at the
/// CLI edge only.
pub fn reference_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}

/// Path of the journal snapshot file.
pub fn snapshot_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(tradejournal_core::data_dir()?.join("journal.json"))
}

/// Load the market calendar: the user file when present, the built-in
/// table otherwise.
pub fn load_calendar() -> Result<MarketCalendar, Box<dyn std::error::Error>> {
    let path = tradejournal_core::data_dir()?.join("market_calendar.toml");
    if path.exists() {
        Ok(MarketCalendar::load(&path)?)
    } else {
        Ok(MarketCalendar::builtin())
    }
}
