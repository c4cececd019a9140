//! Core data types for the task list.

use serde::{Deserialize, Serialize};

/// A persisted task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, strictly increasing and never reused.
    pub id: i64,
    /// Never empty for a persisted task.
    pub title: String,
    /// Free text; rows with a NULL description read back as `""`.
    pub desc: String,
}

/// Title and description as submitted by the create and edit forms.
///
/// Both fields are optional on the wire; a missing field counts as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

impl TaskInput {
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
        }
    }

    /// Trimmed title.
    pub fn title(&self) -> &str {
        self.title.trim()
    }

    /// Trimmed description.
    pub fn desc(&self) -> &str {
        self.desc.trim()
    }

    /// Whether the title is blank after trimming.
    pub fn is_blank(&self) -> bool {
        self.title().is_empty()
    }
}
