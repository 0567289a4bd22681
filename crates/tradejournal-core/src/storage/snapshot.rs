//! JSON snapshot of the journal's habit documents.
//!
//! Stands in for the hosted document store: the CLI loads a snapshot,
//! mutates it, and saves it back. The analytics engine only ever sees the
//! loaded collections and never writes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::error::{StoreError, ValidationError};
use crate::habit::{CompletionRecord, HabitCategory, HabitDefinition};

/// On-disk journal state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalSnapshot {
    #[serde(default)]
    pub habits: Vec<HabitDefinition>,
    #[serde(default)]
    pub completions: Vec<CompletionRecord>,
}

impl JournalSnapshot {
    /// Load a snapshot, treating a missing file as an empty journal.
    pub fn load_or_default(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|err| StoreError::ParseFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(self).map_err(|err| StoreError::ParseFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|source| StoreError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a habit with a fresh id and return it.
    pub fn add_habit(
        &mut self,
        name: &str,
        category: HabitCategory,
        icon: &str,
        now: DateTime<Utc>,
    ) -> Result<HabitDefinition, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let habit = HabitDefinition {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            category,
            icon: icon.to_string(),
            created_at: now,
        };
        self.habits.push(habit.clone());
        Ok(habit)
    }

    /// Remove a habit and all of its completion records.
    ///
    /// Returns true if the habit existed.
    pub fn remove_habit(&mut self, habit_id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != habit_id);
        if self.habits.len() == before {
            return false;
        }
        self.completions.retain(|record| record.habit_id != habit_id);
        true
    }

    /// Toggle a habit's completion for one day.
    ///
    /// Removes every record for the (habit, date) pair if any exist,
    /// otherwise inserts one. Returns the resulting completed state.
    pub fn toggle_completion(
        &mut self,
        habit_id: &str,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        if !self.habits.iter().any(|habit| habit.id == habit_id) {
            return Err(StoreError::UnknownHabit(habit_id.to_string()));
        }

        let key = date.to_string();
        let before = self.completions.len();
        self.completions
            .retain(|record| !(record.habit_id == habit_id && record.date == key));
        if self.completions.len() < before {
            return Ok(false);
        }

        self.completions.push(CompletionRecord {
            id: Uuid::new_v4().to_string(),
            habit_id: habit_id.to_string(),
            date: key,
            created_at: now,
        });
        Ok(true)
    }
}
