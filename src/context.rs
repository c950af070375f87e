//! Application Context
//!
//! The controller and its screen store, shared via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_controller::{TaskIntent, TaskListController};

use crate::store::{sync_screen, ScreenModel, ScreenStore};

/// Screen-wide state provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Authoritative state, not reactive itself
    controller: StoredValue<TaskListController>,
    /// Reactive mirror read by components
    pub screen: ScreenStore,
}

impl TodoContext {
    pub fn new() -> Self {
        Self {
            controller: StoredValue::new(TaskListController::new()),
            screen: Store::new(ScreenModel::default()),
        }
    }

    /// Apply a user action and refresh the screen
    pub fn dispatch(&self, intent: TaskIntent) {
        let screen = self.screen;
        self.controller.update_value(|controller| {
            if let Some(outcome) = controller.apply(intent) {
                tracing::debug!(?outcome, "[UI] submit");
            }
            sync_screen(&screen, controller);
        });
    }
}

/// Get the todo context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
