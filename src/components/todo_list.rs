//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_todo_context;
use crate::store::ScreenModelStoreFields;

/// All tasks in insertion order
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todo_context();
    let tasks = ctx.screen.tasks();

    view! {
        <div class="todo-list">
            <For
                each=move || tasks.get()
                // Text is part of the key so an edited row re-renders
                key=|task| (task.id, task.text.clone())
                children=move |task| view! { <TodoRow task=task /> }
            />
        </div>
    }
}
