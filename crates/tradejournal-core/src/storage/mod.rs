//! Local snapshot storage and data-directory resolution.

mod snapshot;

pub use snapshot::JournalSnapshot;

use std::path::PathBuf;

/// Returns the journal data directory.
///
/// `TRADEJOURNAL_DATA_DIR` overrides the location wholesale (tests rely on
/// this for isolation). Otherwise `~/.config/tradejournal[-dev]`, selected
/// by `TRADEJOURNAL_ENV`. The directory is created if missing.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var("TRADEJOURNAL_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let base = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env =
                std::env::var("TRADEJOURNAL_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base.join("tradejournal-dev")
            } else {
                base.join("tradejournal")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
