//! Task Entity

use serde::{Deserialize, Serialize};

/// Task identifier, 1-based position at creation time
pub type TaskId = u32;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }

    /// Same task, new text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self { id: self.id, text: text.into() }
    }
}
