//! Database layer for the task list.

pub mod tasks;

use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long a connection waits on SQLite's writer lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TASKS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        desc TEXT
    )";

/// Connection factory for the task store.
///
/// Holds only the database location. Every operation opens its own
/// connection and closes it before returning, so no handle outlives a call.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open or create the database at the given path and ensure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Self {
            path: path.as_ref().to_path_buf(),
        };

        db.ensure_schema()?;

        Ok(db)
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the tasks table if it does not exist yet. Safe to call repeatedly.
    pub fn ensure_schema(&self) -> Result<()> {
        self.with_conn(|conn| {
            // Journal mode persists in the database file.
            conn.execute_batch("PRAGMA journal_mode=WAL;")?;
            conn.execute_batch(CREATE_TASKS_TABLE)?;
            Ok(())
        })
    }

    /// Open a fresh connection to the store.
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Execute a function against a connection scoped to this call.
    ///
    /// The connection is dropped when `f` returns, whether it succeeded or not.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.connect()?;
        f(&conn)
    }
}
