use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use tradejournal_core::{
    week_of, HabitAnalytics, HabitCategory, JournalSnapshot, DEFAULT_LOOKBACK_DAYS,
};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a habit
    Add {
        /// Habit name
        name: String,
        /// One of: pre-market, during-trade, post-market, mindset, health, learning
        #[arg(long, default_value = "mindset")]
        category: HabitCategory,
        /// Display icon token
        #[arg(long, default_value = "target")]
        icon: String,
    },
    /// List habits
    List,
    /// Delete a habit and its completions
    Remove {
        /// Habit id
        id: String,
    },
    /// Toggle a habit's completion for a day
    Toggle {
        /// Habit id
        id: String,
        /// Day to toggle (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Current streak for a habit
    Streak {
        /// Habit id
        id: String,
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Aggregate stats plus per-habit rows
    Stats {
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Completion-rate lookback window in days
        #[arg(long, default_value_t = DEFAULT_LOOKBACK_DAYS)]
        window: u32,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let path = super::snapshot_path()?;

    match action {
        HabitAction::Add { name, category, icon } => {
            let mut snapshot = JournalSnapshot::load_or_default(&path)?;
            let habit = snapshot.add_habit(&name, category, &icon, Utc::now())?;
            snapshot.save(&path)?;
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List => {
            let snapshot = JournalSnapshot::load_or_default(&path)?;
            println!("{}", serde_json::to_string_pretty(&snapshot.habits)?);
        }
        HabitAction::Remove { id } => {
            let mut snapshot = JournalSnapshot::load_or_default(&path)?;
            if !snapshot.remove_habit(&id) {
                return Err(format!("no habit with id {id}").into());
            }
            snapshot.save(&path)?;
            println!("habit removed");
        }
        HabitAction::Toggle { id, date } => {
            let mut snapshot = JournalSnapshot::load_or_default(&path)?;
            let day = super::reference_date(date);
            let completed = snapshot.toggle_completion(&id, day, Utc::now())?;
            snapshot.save(&path)?;
            println!("{}", if completed { "completed" } else { "cleared" });
        }
        HabitAction::Streak { id, date } => {
            let snapshot = JournalSnapshot::load_or_default(&path)?;
            let reference = super::reference_date(date);
            let analytics = HabitAnalytics::new(&snapshot.completions);
            println!("{}", analytics.current_streak(&id, reference));
        }
        HabitAction::Stats { date, window } => {
            let snapshot = JournalSnapshot::load_or_default(&path)?;
            let reference = super::reference_date(date);
            let analytics = HabitAnalytics::new(&snapshot.completions);
            let report =
                analytics.stats_report(&snapshot.habits, reference, &week_of(reference), window);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
