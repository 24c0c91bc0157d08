//! Mood repository contract and SQLite implementation.
//!
//! # Invariants
//! - `create_mood` validates before touching SQL.
//! - `list_moods` returns records by ascending id (insertion order).

use super::{ensure_schema_ready, parse_timestamp, timestamp_to_db, RepoResult};
use crate::model::mood::{Mood, NewMood};
use crate::model::RecordId;
use chrono::Utc;
use rusqlite::{params, Connection, Row};

const MOOD_SELECT_SQL: &str = "SELECT id, score, energy, note, timestamp FROM moods";

/// Repository interface for mood persistence.
pub trait MoodRepository {
    fn create_mood(&self, mood: &NewMood) -> RepoResult<RecordId>;
    fn list_moods(&self) -> RepoResult<Vec<Mood>>;
    fn recent_moods(&self, limit: u32) -> RepoResult<Vec<Mood>>;
}

/// SQLite-backed mood repository.
pub struct SqliteMoodRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMoodRepository<'conn> {
    /// Wraps a connection whose schema is already at the latest version.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl MoodRepository for SqliteMoodRepository<'_> {
    fn create_mood(&self, mood: &NewMood) -> RepoResult<RecordId> {
        mood.validate()?;

        let timestamp = mood.timestamp.unwrap_or_else(Utc::now);
        self.conn.execute(
            "INSERT INTO moods (score, energy, note, timestamp) VALUES (?1, ?2, ?3, ?4);",
            params![
                mood.score,
                mood.energy,
                mood.note.as_deref(),
                timestamp_to_db(timestamp),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_moods(&self) -> RepoResult<Vec<Mood>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MOOD_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut moods = Vec::new();

        while let Some(row) = rows.next()? {
            moods.push(parse_mood_row(row)?);
        }

        Ok(moods)
    }

    fn recent_moods(&self, limit: u32) -> RepoResult<Vec<Mood>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MOOD_SELECT_SQL} ORDER BY timestamp DESC, id DESC LIMIT ?1;"
        ))?;
        let mut rows = stmt.query([i64::from(limit)])?;
        let mut moods = Vec::new();

        while let Some(row) = rows.next()? {
            moods.push(parse_mood_row(row)?);
        }

        Ok(moods)
    }
}

fn parse_mood_row(row: &Row<'_>) -> RepoResult<Mood> {
    let timestamp = parse_timestamp(row.get("timestamp")?, "moods.timestamp")?;

    Ok(Mood {
        id: row.get("id")?,
        score: row.get("score")?,
        energy: row.get("energy")?,
        note: row.get("note")?,
        timestamp,
    })
}
