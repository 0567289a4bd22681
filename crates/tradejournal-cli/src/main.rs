use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tradejournal-cli", version, about = "Trading journal CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit tracker
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Trading-day alerts
    Alerts {
        #[command(subcommand)]
        action: commands::alerts::AlertsAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Alerts { action } => commands::alerts::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
