//! Log Panel Component
//!
//! Recent log lines from the in-memory ring, for on-device debugging.

use leptos::prelude::*;

#[component]
pub fn LogPanel(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    // Snapshot on open; the ring is not reactive
    Effect::new(move |_| {
        if open.get() {
            set_lines.set(ring_logger::recent_lines());
        }
    });

    let on_clear = move |_| {
        ring_logger::clear_recent();
        set_lines.set(Vec::new());
    };

    view! {
        <Show when=move || open.get()>
            <div class="log-panel">
                <div class="log-panel-bar">
                    <span>{move || format!("{} lines", lines.with(|l| l.len()))}</span>
                    <button class="btn outline" on:click=on_clear>"Clear"</button>
                    <button class="btn outline" on:click=move |_| set_open.set(false)>"Close"</button>
                </div>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </div>
        </Show>
    }
}
