//! Task Intents
//!
//! User actions coming from the rendering layer.

use crate::controller::{SubmitOutcome, TaskListController};
use crate::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIntent {
    /// "Add" tapped
    StartNew,
    /// A task row tapped
    BeginEditing(TaskId),
    /// Keystroke in the input field
    UpdateDraft(String),
    /// Send button or Done key
    Submit,
    /// Cancel button in the input area
    CancelEdit,
}

impl TaskListController {
    /// Route an intent to its operation. Only `Submit` yields an outcome.
    pub fn apply(&mut self, intent: TaskIntent) -> Option<SubmitOutcome> {
        match intent {
            TaskIntent::StartNew => self.start_new_task(),
            TaskIntent::BeginEditing(id) => self.begin_editing(id),
            TaskIntent::UpdateDraft(text) => self.update_draft(text),
            TaskIntent::Submit => return Some(self.submit()),
            TaskIntent::CancelEdit => self.cancel_edit(),
        }
        None
    }
}
