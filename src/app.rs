//! Todo Compose Frontend App
//!
//! Single screen: header, task list, input area.

use leptos::prelude::*;
use rolling_logger::LogBuffer;

use crate::context::TodoContext;
use crate::components::{LogPanel, TodoHeader, TodoInput, TodoList};

/// `logs` is the rolling logger's buffer, shown in debug builds only
#[component]
pub fn App(logs: Option<LogBuffer>) -> impl IntoView {
    // List and draft live for the lifetime of the screen
    provide_context(TodoContext::new());
    tracing::info!("[APP] Todo screen mounted");

    let log_panel = logs
        .filter(|_| cfg!(debug_assertions))
        .map(|buffer| view! { <LogPanel buffer=buffer /> });

    view! {
        <div class="todo-screen">
            <TodoHeader />
            <TodoList />
            <TodoInput />
            {log_panel}
        </div>
    }
}
