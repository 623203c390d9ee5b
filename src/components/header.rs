//! Header Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields, Tab};

/// App title with the filter toggle (deck view only).
/// Double-clicking the title opens the log panel.
#[component]
pub fn Header(set_filter_open: WriteSignal<bool>, set_log_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let on_deck = move || store.tab().get() == Tab::Match;

    view! {
        <header class="app-header">
            <h1 on:dblclick=move |_| set_log_open.update(|open| *open = !*open)>"Grant Deck"</h1>
            <Show when=on_deck>
                <button class="filter-btn" on:click=move |_| set_filter_open.set(true)>
                    "Filter"
                </button>
            </Show>
        </header>
    }
}
