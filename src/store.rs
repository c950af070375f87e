//! Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The store is a render-only mirror of the controller.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_controller::{Task, TaskId, TaskListController};

/// What the screen renders, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ScreenModel {
    /// Tasks in display order
    pub tasks: Vec<Task>,
    /// Input field value
    pub draft_text: String,
    /// Cancel button shown (draft non-empty)
    pub cancel_visible: bool,
    /// Task being edited, for row highlighting
    pub editing: Option<TaskId>,
}

/// Type alias for the store
pub type ScreenStore = Store<ScreenModel>;

// ========================
// Store Helper Functions
// ========================

/// Copy controller state into the store.
///
/// Only changed fields are written, so typing does not re-render the list.
pub fn sync_screen(store: &ScreenStore, controller: &TaskListController) {
    if store.tasks().with_untracked(|tasks| tasks.as_slice() != controller.tasks()) {
        *store.tasks().write() = controller.tasks().to_vec();
    }
    if store.draft_text().with_untracked(|draft| draft != controller.draft_text()) {
        *store.draft_text().write() = controller.draft_text().to_string();
    }
    if store.cancel_visible().get_untracked() != controller.cancel_visible() {
        store.cancel_visible().set(controller.cancel_visible());
    }
    if store.editing().get_untracked() != controller.target() {
        store.editing().set(controller.target());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn assert_mirrors(store: &ScreenStore, controller: &TaskListController) {
        assert_eq!(store.tasks().get_untracked(), controller.tasks());
        assert_eq!(store.draft_text().get_untracked(), controller.draft_text());
        assert_eq!(store.cancel_visible().get_untracked(), controller.cancel_visible());
        assert_eq!(store.editing().get_untracked(), controller.target());
    }

    #[test]
    fn test_sync_mirrors_controller() {
        Owner::new().with(|| {
            let store = Store::new(ScreenModel::default());
            let mut controller = TaskListController::new();

            controller.update_draft("Buy milk");
            controller.submit();
            sync_screen(&store, &controller);
            assert_mirrors(&store, &controller);
            assert_eq!(store.tasks().get_untracked(), vec![Task::new(1, "Buy milk")]);

            // Mid-edit: draft loaded, target set
            controller.begin_editing(1);
            controller.update_draft("Buy almond milk");
            sync_screen(&store, &controller);
            assert_mirrors(&store, &controller);
            assert_eq!(store.editing().get_untracked(), Some(1));
            assert!(store.cancel_visible().get_untracked());

            controller.submit();
            sync_screen(&store, &controller);
            assert_mirrors(&store, &controller);
            assert_eq!(store.tasks().get_untracked(), vec![Task::new(1, "Buy almond milk")]);
            assert_eq!(store.editing().get_untracked(), None);
        });
    }

    #[test]
    fn test_draft_change_leaves_tasks_untouched() {
        Owner::new().with(|| {
            let store = Store::new(ScreenModel::default());
            let mut controller = TaskListController::new();
            controller.update_draft("first");
            controller.submit();
            sync_screen(&store, &controller);

            // Counts recomputations of a memo that reads only the task list
            let runs = Arc::new(AtomicUsize::new(0));
            let tasks_len = Memo::new({
                let runs = Arc::clone(&runs);
                move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    store.tasks().with(|tasks| tasks.len())
                }
            });
            assert_eq!(tasks_len.get(), 1);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            for draft in ["s", "se", "sec", ""] {
                controller.update_draft(draft);
                sync_screen(&store, &controller);
                assert_eq!(tasks_len.get(), 1);
            }
            assert_eq!(runs.load(Ordering::SeqCst), 1);
            assert_eq!(store.draft_text().get_untracked(), "");

            controller.update_draft("second");
            controller.submit();
            sync_screen(&store, &controller);
            assert_eq!(tasks_len.get(), 2);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }
}
