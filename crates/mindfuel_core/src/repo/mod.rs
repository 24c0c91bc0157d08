//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must run record validation before persistence.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Recent-first reads order by `timestamp DESC, id DESC`.

pub mod habit_repo;
pub mod mood_repo;

use crate::db::schema::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::RecordValidationError;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(RecordValidationError),
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Rejects connections that were not opened through `open_db*`.
fn ensure_schema_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version = current_user_version(conn)?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}

fn timestamp_to_db(timestamp: DateTime<Utc>) -> i64 {
    timestamp.timestamp_millis()
}

fn parse_timestamp(millis: i64, column: &str) -> RepoResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid timestamp `{millis}` in {column}"))
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_timestamp, timestamp_to_db};
    use chrono::{TimeZone, Utc};

    #[test]
    fn timestamps_keep_millisecond_precision() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let stored = timestamp_to_db(at);
        assert_eq!(stored, 1_700_000_000_123);
        assert_eq!(parse_timestamp(stored, "habits.timestamp").unwrap(), at);
    }

    #[test]
    fn out_of_range_timestamp_is_invalid_data() {
        assert!(parse_timestamp(i64::MAX, "moods.timestamp").is_err());
    }
}
