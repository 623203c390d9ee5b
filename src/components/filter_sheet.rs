//! Filter Sheet Component
//!
//! Bottom sheet for choosing the deck sort order.

use leptos::prelude::*;
use leptos_swipe::SwipeSignals;

use crate::sort::{SortDirection, SortKey, SortSpec};
use crate::store::{store_apply_sort, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterSheet(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let swipe = expect_context::<SwipeSignals>();

    // Draft selection; reset from the store each time the sheet opens
    let (key, set_key) = signal::<Option<SortKey>>(None);
    let (direction, set_direction) = signal(SortDirection::default());

    Effect::new(move |_| {
        if open.get() {
            let current = store.sort().get_untracked();
            set_key.set(current.key);
            set_direction.set(current.direction);
        }
    });

    let apply = move |_| {
        let spec = SortSpec {
            key: key.get_untracked(),
            direction: direction.get_untracked(),
        };
        log::info!("[DECK] sort {:?}", spec);
        store_apply_sort(&store, spec);
        swipe.reset();
        set_open.set(false);
    };

    let key_options = SortKey::ALL
        .iter()
        .map(|k| (Some(*k), k.label()))
        .chain(std::iter::once((None, "None")))
        .collect::<Vec<_>>();

    view! {
        <Show when=move || open.get()>
            <div class="sheet-overlay" on:click=move |_| set_open.set(false)>
                <div class="sheet" on:click=|ev| ev.stop_propagation()>
                    <div class="grabber" />
                    <h2>"Filter & Sort"</h2>

                    <h3>"Sort by"</h3>
                    <div class="radio-row">
                        {key_options.clone().into_iter().map(|(value, label)| view! {
                            <button
                                class=move || if key.get() == value { "radio selected" } else { "radio" }
                                on:click=move |_| set_key.set(value)
                            >
                                {label}
                            </button>
                        }).collect_view()}
                    </div>

                    <h3>"Direction"</h3>
                    <div class="radio-row">
                        {[SortDirection::Desc, SortDirection::Asc].into_iter().map(|value| view! {
                            <button
                                class=move || if direction.get() == value { "radio selected" } else { "radio" }
                                on:click=move |_| set_direction.set(value)
                            >
                                {value.label()}
                            </button>
                        }).collect_view()}
                    </div>

                    <div class="sheet-actions">
                        <button class="btn outline" on:click=move |_| set_open.set(false)>"Cancel"</button>
                        <button class="btn primary" on:click=apply>"Apply"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
