//! Edit Session
//!
//! Transient compose/edit state behind the input field.

use crate::task::TaskId;

/// Draft text plus the task it will overwrite, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    /// Text currently in the input field
    pub draft_text: String,
    /// Task being edited (None = next submit appends)
    pub target: Option<TaskId>,
}

/// Coarse view of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// No target, empty draft
    Idle,
    /// No target, draft in progress
    Composing,
    /// A target is set. The draft may be empty after the user cleared it.
    Editing(TaskId),
}

impl EditSession {
    pub fn state(&self) -> EditState {
        match self.target {
            Some(id) => EditState::Editing(id),
            None if self.draft_text.is_empty() => EditState::Idle,
            None => EditState::Composing,
        }
    }

    /// Back to Idle
    pub fn reset(&mut self) {
        self.draft_text.clear();
        self.target = None;
    }
}
