//! Mood domain record.
//!
//! `score` and `energy` are caller-defined scales and are not range checked.

use super::{RecordId, RecordValidationError, MAX_NOTE_CHARS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One mood check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub id: RecordId,
    pub score: i64,
    pub energy: Option<i64>,
    pub note: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Insert-time mood shape; identity comes from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMood {
    pub score: i64,
    pub energy: Option<i64>,
    pub note: Option<String>,
    /// Defaults to the moment of insertion when `None`.
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewMood {
    pub fn new(score: i64) -> Self {
        Self {
            score,
            energy: None,
            note: None,
            timestamp: None,
        }
    }

    pub fn with_energy(mut self, energy: i64) -> Self {
        self.energy = Some(energy);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Checks record invariants before persistence.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if let Some(note) = &self.note {
            let chars = note.chars().count();
            if chars > MAX_NOTE_CHARS {
                return Err(RecordValidationError::NoteTooLong {
                    chars,
                    max: MAX_NOTE_CHARS,
                });
            }
        }
        Ok(())
    }
}
