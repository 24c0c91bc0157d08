//! Domain records for habit and mood tracking.
//!
//! # Responsibility
//! - Define the persisted record shapes and their insert-time counterparts.
//! - Own record-level validation shared by every write path.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `RecordId`.
//! - Records are immutable after insertion; there is no update or delete.

pub mod habit;
pub mod mood;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned integer identity shared by habits and moods.
pub type RecordId = i64;

/// Maximum mood note length, counted in characters.
pub const MAX_NOTE_CHARS: usize = 200;

/// Validation failure for a record about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Habit name is empty or whitespace-only.
    EmptyHabitName,
    /// Mood note exceeds [`MAX_NOTE_CHARS`].
    NoteTooLong { chars: usize, max: usize },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyHabitName => write!(f, "habit name must not be empty"),
            Self::NoteTooLong { chars, max } => {
                write!(f, "mood note is {chars} characters; at most {max} allowed")
            }
        }
    }
}

impl Error for RecordValidationError {}
