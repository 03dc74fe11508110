//! Relational store: SQLite via sqlx, holding the `players` and `matches` tables.
//!
//! Each accessor issues its queries per call; the pool owns connection reuse and
//! SQLite owns id assignment and transactional guarantees.

mod error;
mod matches;
mod players;

pub use error::StoreError;
pub use matches::RECENT_MATCH_LIMIT;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const CREATE_PLAYERS: &str = "CREATE TABLE IF NOT EXISTS players (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT    NOT NULL
)";

// Deleting a player that still has matches is rejected by the foreign keys.
const CREATE_MATCHES: &str = "CREATE TABLE IF NOT EXISTS matches (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    winner_id INTEGER NOT NULL REFERENCES players (id) ON DELETE RESTRICT,
    loser_id  INTEGER NOT NULL REFERENCES players (id) ON DELETE RESTRICT,
    played_at TEXT    NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)";

/// Handle to the store. Cloning shares the underlying pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open a pool on `url` (e.g. `sqlite://tracker.db`), creating the file if needed,
    /// and make sure both tables exist.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// A fresh in-memory store. Uses a single connection that is never recycled,
    /// since every SQLite in-memory connection is its own database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Create the `players` and `matches` tables if they do not exist yet.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_PLAYERS).execute(&self.pool).await?;
        sqlx::query(CREATE_MATCHES).execute(&self.pool).await?;
        Ok(())
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
