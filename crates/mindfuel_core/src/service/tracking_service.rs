//! Habit/mood tracking use-case service.
//!
//! # Responsibility
//! - Provide ingestion entry points that validate before persisting.
//! - Build `stats` and `timeline` read models, plus the fixed `insights`.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.
//! - Read models are pure reads; `stats` and `timeline` each issue two
//!   independent queries with no transaction spanning them.

use crate::model::habit::NewHabit;
use crate::model::mood::NewMood;
use crate::model::RecordId;
use crate::repo::habit_repo::HabitRepository;
use crate::repo::mood_repo::MoodRepository;
use crate::repo::RepoResult;
use crate::service::stats::{average_mood, habit_frequencies, HabitFrequencies};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

/// Maximum entries per record kind returned by [`TrackingService::timeline`].
pub const TIMELINE_LIMIT: u32 = 30;

/// Fixed payload returned by [`insights`].
pub const INSIGHTS_PLACEHOLDER: &str = "Feature coming soon. Track more data to unlock this.";

/// Aggregate statistics over every stored record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub habit_frequencies: HabitFrequencies,
    pub average_mood: f64,
}

/// Habit projection used by the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitTimelineEntry {
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

/// Mood projection used by the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodTimelineEntry {
    pub score: i64,
    pub energy: Option<i64>,
    pub timestamp: DateTime<Utc>,
}

/// Recent activity, newest first, at most [`TIMELINE_LIMIT`] entries per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub habits: Vec<HabitTimelineEntry>,
    pub moods: Vec<MoodTimelineEntry>,
}

/// Placeholder insights read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub insights: &'static str,
}

/// Use-case service over habit and mood repositories.
pub struct TrackingService<H: HabitRepository, M: MoodRepository> {
    habits: H,
    moods: M,
}

impl<H: HabitRepository, M: MoodRepository> TrackingService<H, M> {
    /// Creates a service using the provided repository implementations.
    pub fn new(habits: H, moods: M) -> Self {
        Self { habits, moods }
    }

    /// Validates and persists one habit occurrence.
    ///
    /// # Contract
    /// - `name`/`tag` are stored verbatim.
    /// - Returns the store-assigned id.
    pub fn log_habit(&self, habit: &NewHabit) -> RepoResult<RecordId> {
        let id = self.habits.create_habit(habit)?;
        info!(
            "event=habit_logged module=service status=ok id={} has_tag={}",
            id,
            habit.tag.is_some()
        );
        Ok(id)
    }

    /// Validates and persists one mood check-in.
    pub fn log_mood(&self, mood: &NewMood) -> RepoResult<RecordId> {
        let id = self.moods.create_mood(mood)?;
        info!(
            "event=mood_logged module=service status=ok id={} has_energy={} has_note={}",
            id,
            mood.energy.is_some(),
            mood.note.is_some()
        );
        Ok(id)
    }

    /// Computes habit frequencies and the average mood over all records.
    pub fn stats(&self) -> RepoResult<Stats> {
        let habits = self.habits.list_habits()?;
        let moods = self.moods.list_moods()?;

        Ok(Stats {
            habit_frequencies: habit_frequencies(&habits),
            average_mood: average_mood(&moods),
        })
    }

    /// Returns the most recent habits and moods, newest first.
    ///
    /// Ties on `timestamp` are broken by the higher id first.
    pub fn timeline(&self) -> RepoResult<Timeline> {
        let habits = self
            .habits
            .recent_habits(TIMELINE_LIMIT)?
            .into_iter()
            .map(|habit| HabitTimelineEntry {
                name: habit.name,
                timestamp: habit.timestamp,
            })
            .collect();
        let moods = self
            .moods
            .recent_moods(TIMELINE_LIMIT)?
            .into_iter()
            .map(|mood| MoodTimelineEntry {
                score: mood.score,
                energy: mood.energy,
                timestamp: mood.timestamp,
            })
            .collect();

        Ok(Timeline { habits, moods })
    }
}

/// Returns the fixed insights placeholder.
///
/// Takes no repository, so it can never touch the store.
pub fn insights() -> Insights {
    Insights {
        insights: INSIGHTS_PLACEHOLDER,
    }
}
