//! Aggregations over stored records.
//!
//! Pure functions; the service feeds them full scans from the repositories.

use crate::model::habit::Habit;
use crate::model::mood::Mood;
use indexmap::IndexMap;
use serde::Serialize;

/// Habit name to occurrence count, in first-encounter order.
///
/// Serialized as a JSON object whose key order follows the scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HabitFrequencies {
    counts: IndexMap<String, u64>,
}

impl HabitFrequencies {
    /// Count for one habit name, `None` when never logged.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    fn record(&mut self, name: &str) {
        match self.counts.get_mut(name) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(name.to_string(), 1);
            }
        }
    }
}

/// Counts habits per name in a single pass.
pub fn habit_frequencies(habits: &[Habit]) -> HabitFrequencies {
    let mut frequencies = HabitFrequencies::default();
    for habit in habits {
        frequencies.record(&habit.name);
    }
    frequencies
}

/// Mean mood score rounded to 2 decimals (ties to even); `0.0` for no moods.
pub fn average_mood(moods: &[Mood]) -> f64 {
    if moods.is_empty() {
        return 0.0;
    }

    // i128 cannot overflow for any realistic row count of i64 scores.
    let total: i128 = moods.iter().map(|mood| i128::from(mood.score)).sum();
    round_to_hundredths(total as f64 / moods.len() as f64)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
