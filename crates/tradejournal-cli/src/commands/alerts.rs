use chrono::NaiveDate;
use clap::Subcommand;
use tradejournal_core::{SafetyClassifier, DEFAULT_HORIZON_DAYS};

#[derive(Subcommand)]
pub enum AlertsAction {
    /// Trading-safety status for a day
    Status {
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Next day safe enough to trade
    NextSafe {
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Forward-scan horizon in days
        #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
        horizon: u32,
    },
    /// Calendar entries within the horizon
    Upcoming {
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Forward-scan horizon in days
        #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
        horizon: u32,
    },
}

pub fn run(action: AlertsAction) -> Result<(), Box<dyn std::error::Error>> {
    let calendar = super::load_calendar()?;

    match action {
        AlertsAction::Status { date } => {
            let report =
                SafetyClassifier::new().classify(super::reference_date(date), &calendar);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        AlertsAction::NextSafe { date, horizon } => {
            let next = SafetyClassifier::with_horizon(horizon)
                .next_safe_day(super::reference_date(date), &calendar);
            // Serializes as `null` when the horizon is exhausted.
            println!("{}", serde_json::to_string_pretty(&next)?);
        }
        AlertsAction::Upcoming { date, horizon } => {
            let alerts = SafetyClassifier::with_horizon(horizon)
                .upcoming_alerts(super::reference_date(date), &calendar);
            println!("{}", serde_json::to_string_pretty(&alerts)?);
        }
    }
    Ok(())
}
