//! Shared store handle injected into every handler.
//!
//! # Invariants
//! - One SQLite connection per process, guarded by a mutex.
//! - Store calls run on the blocking pool and hold the lock only for the call.
//! - A poisoned lock is recovered, not surfaced as a permanent failure.

use std::{
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use mindfuel_core::db::{open_db, open_db_in_memory, DbResult};
use mindfuel_core::{RepoResult, SqliteHabitRepository, SqliteMoodRepository, TrackingService};
use rusqlite::Connection;
use tokio::task::spawn_blocking;

use crate::error::ApiError;

pub type SqliteTrackingService<'conn> =
    TrackingService<SqliteHabitRepository<'conn>, SqliteMoodRepository<'conn>>;

#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a connection that already has the schema applied.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Opens the file-backed store, creating tables if absent.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        open_db(path).map(Self::new)
    }

    pub fn in_memory() -> DbResult<Self> {
        open_db_in_memory().map(Self::new)
    }

    /// Runs one use-case against the store on the blocking pool.
    pub async fn with_service<T>(
        &self,
        f: impl FnOnce(&SqliteTrackingService<'_>) -> RepoResult<T> + Send + 'static,
    ) -> Result<T, ApiError>
    where
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);

        spawn_blocking(move || {
            // A panicked handler leaves the connection usable; SQLite rolls back
            // any statement it interrupted.
            let conn = conn.lock().unwrap_or_else(PoisonError::into_inner);
            let service = TrackingService::new(
                SqliteHabitRepository::try_new(&conn)?,
                SqliteMoodRepository::try_new(&conn)?,
            );
            f(&service).map_err(ApiError::from)
        })
        .await
        .map_err(|err| ApiError::Infrastructure(format!("store task failed: {err}")))?
    }
}
