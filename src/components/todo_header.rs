//! Todo Header Component
//!
//! Screen title with the "Add Todo" button.

use leptos::prelude::*;
use todo_controller::TaskIntent;

use crate::context::use_todo_context;

const TITLE: &str = "Todo List";

/// Title row. "+" resets the input so the next submit adds a task.
#[component]
pub fn TodoHeader() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <div class="todo-header">
            <span class="todo-title">{TITLE}</span>
            <button
                class="icon-btn add-btn"
                title="Add Todo"
                aria-label="Add Todo"
                on:click=move |_| ctx.dispatch(TaskIntent::StartNew)
            >
                "+"
            </button>
        </div>
    }
}
