//! SQLite schema registry and bootstrap.
//!
//! # Responsibility
//! - Register schema versions in strictly increasing order.
//! - Create missing tables atomically on every startup.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied schema version is mirrored to `PRAGMA user_version`.
//! - Every schema script is safe to re-run (`IF NOT EXISTS`).

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct SchemaVersion {
    version: u32,
    sql: &'static str,
}

const SCHEMA_VERSIONS: &[SchemaVersion] = &[SchemaVersion {
    version: 1,
    sql: include_str!("0001_init.sql"),
}];

/// Returns the latest schema version known by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_VERSIONS.last().map_or(0, |schema| schema.version)
}

/// Ensures the habit/mood tables exist on the provided connection.
///
/// Idempotent: a connection already at [`latest_version`] is left untouched.
pub fn apply_schema(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for schema in SCHEMA_VERSIONS {
        if schema.version <= current_version {
            continue;
        }

        tx.execute_batch(schema.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", schema.version))?;
    }
    tx.commit()?;

    info!(
        "event=schema_apply module=db status=ok from_version={} to_version={}",
        current_version, latest
    );
    Ok(())
}

/// Reads `PRAGMA user_version` from the connection.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
