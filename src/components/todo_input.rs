//! Todo Input Component
//!
//! Single-line draft field with Cancel and Send buttons.
//! Enter (the mobile "Done" key) submits the same way Send does.

use leptos::prelude::*;
use todo_controller::TaskIntent;

use crate::context::use_todo_context;
use crate::keyboard::hide_keyboard;
use crate::store::ScreenModelStoreFields;

const INPUT_LABEL: &str = "New Todo";

#[component]
pub fn TodoInput() -> impl IntoView {
    let ctx = use_todo_context();
    let draft_text = ctx.screen.draft_text();
    let cancel_visible = ctx.screen.cancel_visible();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(TaskIntent::Submit);
        hide_keyboard();
    };

    let cancel = move |_| {
        ctx.dispatch(TaskIntent::CancelEdit);
        hide_keyboard();
    };

    view! {
        <form class="todo-input" on:submit=submit>
            <label class="todo-input-label">
                <span>{INPUT_LABEL}</span>
                <input
                    type="text"
                    enterkeyhint="done"
                    placeholder=INPUT_LABEL
                    prop:value=move || draft_text.get()
                    on:input=move |ev| ctx.dispatch(TaskIntent::UpdateDraft(event_target_value(&ev)))
                />
            </label>

            <div class="todo-input-actions">
                <Show when=move || cancel_visible.get()>
                    <button type="button" class="icon-btn cancel-btn" aria-label="Cancel" on:click=cancel>
                        "✕"
                    </button>
                </Show>
                <button type="submit" class="icon-btn send-btn" aria-label="Send">
                    "➤"
                </button>
            </div>
        </form>
    }
}
