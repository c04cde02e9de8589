//! Task records.

use serde::{Deserialize, Serialize};

use crate::ids::TaskId;

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: TaskId,

    /// Free-form task description.
    pub text: String,

    /// Whether the task has been checked off.
    pub completed: bool,
}

impl Task {
    /// Creates a new, not yet completed task.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            completed: false,
        }
    }

    /// Applies a partial update. Fields left as `None` are untouched.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Partial update for a [`Task`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement text, if any.
    pub text: Option<String>,
    /// Replacement completion flag, if any.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Sets the replacement text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the replacement completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}
