//! Habit domain record.
//!
//! # Invariants
//! - `name` is never empty after validation.
//! - `timestamp` is fixed at insertion and never rewritten.

use super::{RecordId, RecordValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged occurrence of a named habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: RecordId,
    pub name: String,
    pub tag: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Insert-time habit shape; identity comes from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub name: String,
    pub tag: Option<String>,
    /// Defaults to the moment of insertion when `None`.
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewHabit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: None,
            timestamp: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Checks record invariants before persistence.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecordValidationError::EmptyHabitName);
        }
        Ok(())
    }
}
