//! Habit repository contract and SQLite implementation.
//!
//! # Invariants
//! - `create_habit` validates before touching SQL.
//! - `list_habits` returns records by ascending id (insertion order).

use super::{ensure_schema_ready, parse_timestamp, timestamp_to_db, RepoResult};
use crate::model::habit::{Habit, NewHabit};
use crate::model::RecordId;
use chrono::Utc;
use rusqlite::{params, Connection, Row};

const HABIT_SELECT_SQL: &str = "SELECT id, name, tag, timestamp FROM habits";

/// Repository interface for habit persistence.
pub trait HabitRepository {
    fn create_habit(&self, habit: &NewHabit) -> RepoResult<RecordId>;
    fn list_habits(&self) -> RepoResult<Vec<Habit>>;
    fn recent_habits(&self, limit: u32) -> RepoResult<Vec<Habit>>;
}

/// SQLite-backed habit repository.
pub struct SqliteHabitRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteHabitRepository<'conn> {
    /// Wraps a connection whose schema is already at the latest version.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl HabitRepository for SqliteHabitRepository<'_> {
    fn create_habit(&self, habit: &NewHabit) -> RepoResult<RecordId> {
        habit.validate()?;

        let timestamp = habit.timestamp.unwrap_or_else(Utc::now);
        self.conn.execute(
            "INSERT INTO habits (name, tag, timestamp) VALUES (?1, ?2, ?3);",
            params![
                habit.name.as_str(),
                habit.tag.as_deref(),
                timestamp_to_db(timestamp),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_habits(&self) -> RepoResult<Vec<Habit>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{HABIT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut habits = Vec::new();

        while let Some(row) = rows.next()? {
            habits.push(parse_habit_row(row)?);
        }

        Ok(habits)
    }

    fn recent_habits(&self, limit: u32) -> RepoResult<Vec<Habit>> {
        let mut stmt = self.conn.prepare(&format!(
            "{HABIT_SELECT_SQL} ORDER BY timestamp DESC, id DESC LIMIT ?1;"
        ))?;
        let mut rows = stmt.query([i64::from(limit)])?;
        let mut habits = Vec::new();

        while let Some(row) = rows.next()? {
            habits.push(parse_habit_row(row)?);
        }

        Ok(habits)
    }
}

fn parse_habit_row(row: &Row<'_>) -> RepoResult<Habit> {
    let timestamp = parse_timestamp(row.get("timestamp")?, "habits.timestamp")?;

    Ok(Habit {
        id: row.get("id")?,
        name: row.get("name")?,
        tag: row.get("tag")?,
        timestamp,
    })
}
