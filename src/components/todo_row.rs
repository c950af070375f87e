//! Todo Row Component
//!
//! A single task. Tapping it loads the task into the input for editing.

use leptos::prelude::*;
use todo_controller::{Task, TaskIntent};

use crate::context::use_todo_context;
use crate::store::ScreenModelStoreFields;

#[component]
pub fn TodoRow(task: Task) -> impl IntoView {
    let ctx = use_todo_context();
    let editing = ctx.screen.editing();

    let id = task.id;
    let is_target = move || editing.get() == Some(id);

    view! {
        <div
            class=move || if is_target() { "todo-item editing" } else { "todo-item" }
            on:click=move |_| ctx.dispatch(TaskIntent::BeginEditing(id))
        >
            <span class="todo-text">{task.text}</span>
        </div>
    }
}
