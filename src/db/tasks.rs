//! Task CRUD operations.
//!
//! Each operation is a single auto-committed statement on its own connection.

use super::Database;
use crate::types::Task;
use anyhow::Result;
use rusqlite::{OptionalExtension, Row, params};

pub fn parse_task_row(row: &Row) -> rusqlite::Result<Task> {
    let id: i64 = row.get("id")?;
    let title: String = row.get("title")?;
    let desc: Option<String> = row.get("desc")?;

    Ok(Task {
        id,
        title,
        desc: desc.unwrap_or_default(),
    })
}

impl Database {
    /// List every task, newest first.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, title, desc FROM tasks ORDER BY id DESC")?;
            let tasks = stmt
                .query_map([], parse_task_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(tasks)
        })
    }

    /// Number of stored tasks.
    pub fn count_tasks(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
            Ok(count)
        })
    }

    /// Get a task by id. `None` means no such task.
    pub fn get_task(&self, id: i64) -> Result<Option<Task>> {
        self.with_conn(|conn| {
            let task = conn
                .query_row(
                    "SELECT id, title, desc FROM tasks WHERE id = ?1",
                    params![id],
                    parse_task_row,
                )
                .optional()?;
            Ok(task)
        })
    }

    /// Insert a task and return its new id.
    ///
    /// Title and description are trimmed. A blank title writes nothing and
    /// returns `None`.
    pub fn create_task(&self, title: &str, desc: &str) -> Result<Option<i64>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO tasks (title, desc) VALUES (?1, ?2)",
                params![title, desc.trim()],
            )?;
            Ok(Some(conn.last_insert_rowid()))
        })
    }

    /// Replace the title and description of a task.
    ///
    /// Returns whether a row was changed. Unknown ids and blank titles are
    /// ignored.
    pub fn update_task(&self, id: i64, title: &str, desc: &str) -> Result<bool> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(false);
        }

        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE tasks SET title = ?1, desc = ?2 WHERE id = ?3",
                params![title, desc.trim(), id],
            )?;
            Ok(changed > 0)
        })
    }

    /// Delete a task. Returns whether a row was removed.
    pub fn delete_task(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
            Ok(removed > 0)
        })
    }
}
