//! Core domain logic for MindFuel habit and mood tracking.
//! This crate is the single source of truth for record invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::habit::{Habit, NewHabit};
pub use model::mood::{Mood, NewMood};
pub use model::{RecordId, RecordValidationError, MAX_NOTE_CHARS};
pub use repo::habit_repo::{HabitRepository, SqliteHabitRepository};
pub use repo::mood_repo::{MoodRepository, SqliteMoodRepository};
pub use repo::{RepoError, RepoResult};
pub use service::stats::HabitFrequencies;
pub use service::tracking_service::{
    insights, HabitTimelineEntry, Insights, MoodTimelineEntry, Stats, Timeline, TrackingService,
    INSIGHTS_PLACEHOLDER, TIMELINE_LIMIT,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
