//! Task List Controller
//!
//! The authoritative task list and edit session for one screen.
//! Every operation is synchronous and never fails: invalid requests
//! (empty submit, unknown task) leave the list untouched.

use tracing::{debug, warn};

use crate::session::{EditSession, EditState};
use crate::task::{Task, TaskId};

/// What a submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was empty, nothing changed
    Ignored,
    /// New task appended
    Appended(TaskId),
    /// Target task's text replaced in place
    Replaced(TaskId),
    /// Target id no longer in the list, nothing replaced
    TargetMissing(TaskId),
}

#[derive(Debug, Clone, Default)]
pub struct TaskListController {
    tasks: Vec<Task>,
    session: EditSession,
}

impl TaskListController {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Accessors
    // ========================

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn draft_text(&self) -> &str {
        &self.session.draft_text
    }

    pub fn target(&self) -> Option<TaskId> {
        self.session.target
    }

    pub fn state(&self) -> EditState {
        self.session.state()
    }

    /// Whether the input area shows its cancel button.
    ///
    /// Derived from the draft alone, so it is not the same as "is editing".
    pub fn cancel_visible(&self) -> bool {
        !self.session.draft_text.is_empty()
    }

    // ========================
    // Operations
    // ========================

    /// Reset the session so the next submit appends
    pub fn start_new_task(&mut self) {
        self.session.reset();
        debug!("start new task");
    }

    /// Load a task's text into the draft and target it.
    ///
    /// Unknown ids are ignored.
    pub fn begin_editing(&mut self, id: TaskId) {
        let Some(text) = self.task(id).map(|task| task.text.clone()) else {
            debug!(task_id = id, "begin editing ignored, no such task");
            return;
        };
        self.session.draft_text = text;
        self.session.target = Some(id);
        debug!(task_id = id, "begin editing");
    }

    /// Replace the draft, empty string included
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.session.draft_text = text.into();
    }

    /// Commit the draft.
    ///
    /// Appends when there is no target, otherwise overwrites the target's
    /// text in place. An empty draft changes nothing at all.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.session.draft_text.is_empty() {
            debug!("submit ignored, empty draft");
            return SubmitOutcome::Ignored;
        }

        let text = std::mem::take(&mut self.session.draft_text);
        let outcome = match self.session.target.take() {
            None => {
                // Size-based ids stay unique only while the list is append-only
                let id = self.tasks.len() as TaskId + 1;
                self.tasks.push(Task::new(id, text));
                SubmitOutcome::Appended(id)
            }
            Some(id) => match self.tasks.iter_mut().find(|task| task.id == id) {
                Some(task) => {
                    *task = task.with_text(text);
                    SubmitOutcome::Replaced(id)
                }
                None => SubmitOutcome::TargetMissing(id),
            },
        };

        match outcome {
            SubmitOutcome::TargetMissing(id) => {
                warn!(task_id = id, "submit target missing, draft dropped")
            }
            _ => debug!(?outcome, total = self.tasks.len(), "submit"),
        }
        outcome
    }

    /// Clear the draft. The target, if any, is kept.
    pub fn cancel_edit(&mut self) {
        self.session.draft_text.clear();
        debug!(task_id = ?self.session.target, "cancel edit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_controller_is_empty() {
        let controller = TaskListController::new();
        assert!(controller.tasks().is_empty());
        assert_eq!(controller.draft_text(), "");
        assert_eq!(controller.target(), None);
        assert!(!controller.cancel_visible());
    }

    #[test]
    fn test_submit_appends_with_position_ids() {
        let mut controller = TaskListController::new();
        for text in ["a", "b", "c"] {
            controller.update_draft(text);
            controller.submit();
        }

        let ids: Vec<TaskId> = controller.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(controller.tasks()[2].text, "c");
    }

    #[test]
    fn test_submit_keeps_whitespace() {
        let mut controller = TaskListController::new();
        controller.update_draft("  ");
        assert_eq!(controller.submit(), SubmitOutcome::Appended(1));
        assert_eq!(controller.tasks()[0].text, "  ");
    }

    #[test]
    fn test_begin_editing_unknown_id_is_noop() {
        let mut controller = TaskListController::new();
        controller.update_draft("draft");
        controller.begin_editing(9);

        assert_eq!(controller.draft_text(), "draft");
        assert_eq!(controller.target(), None);
    }

    #[test]
    fn test_cancel_edit_keeps_target() {
        let mut controller = TaskListController::new();
        controller.update_draft("first");
        controller.submit();
        controller.begin_editing(1);

        controller.cancel_edit();
        assert_eq!(controller.draft_text(), "");
        assert_eq!(controller.target(), Some(1));
        assert!(!controller.cancel_visible());

        // Typing again resumes editing the same task
        controller.update_draft("second");
        assert_eq!(controller.submit(), SubmitOutcome::Replaced(1));
        assert_eq!(controller.tasks(), &[Task::new(1, "second")]);
    }

    #[test]
    fn test_cancel_visible_tracks_draft_only() {
        let mut controller = TaskListController::new();
        controller.update_draft("x");
        assert!(controller.cancel_visible());
        assert_eq!(controller.state(), EditState::Composing);

        controller.update_draft("");
        assert!(!controller.cancel_visible());
        assert_eq!(controller.state(), EditState::Idle);
    }

    #[test]
    fn test_submit_with_stale_target_changes_nothing() {
        let mut controller = TaskListController::new();
        controller.update_draft("kept");
        controller.submit();

        controller.session.target = Some(7);
        controller.update_draft("lost");
        assert_eq!(controller.submit(), SubmitOutcome::TargetMissing(7));

        assert_eq!(controller.tasks(), &[Task::new(1, "kept")]);
        assert_eq!(controller.state(), EditState::Idle);
    }
}
