//! Log Panel Component
//!
//! Debug-build view of the most recent log lines.

use leptos::prelude::*;
use rolling_logger::LogBuffer;

/// Collapsed by default. Lines are snapshotted each time the panel opens.
#[component]
pub fn LogPanel(buffer: LogBuffer) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let toggle = move |_| {
        let next = !open.get_untracked();
        if next {
            set_lines.set(buffer.lines());
        }
        set_open.set(next);
    };

    view! {
        <div class="log-panel">
            <button type="button" class="log-toggle" on:click=toggle>
                {move || if open.get() { "Hide logs" } else { "Logs" }}
            </button>
            <Show when=move || open.get()>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </Show>
        </div>
    }
}
