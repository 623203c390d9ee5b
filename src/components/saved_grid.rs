//! Saved Grid Component
//!
//! Two-column grid of shortlisted grants.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::context::use_shortlist;
use crate::models::{short_money, Grant};
use crate::store::{store_open_apply, use_app_store};

#[component]
pub fn SavedGrid() -> impl IntoView {
    let shortlist = use_shortlist();
    let is_empty = move || shortlist.saved.with(|s| s.is_empty());

    view! {
        <div class="saved-screen">
            <Show
                when=move || !is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <h2>"No saved grants yet"</h2>
                        <p>"Swipe right on a grant to shortlist it."</p>
                    </div>
                }
            >
                <div class="saved-toolbar">
                    <span>{move || format!("{} saved", shortlist.saved.with(|s| s.len()))}</span>
                    <ConfirmButton
                        label="Clear all"
                        prompt="Clear all saved?"
                        button_class="clear-btn"
                        on_confirm=move |_| {
                            log::info!("[SAVED] cleared");
                            shortlist.clear();
                        }
                    />
                </div>
                <div class="saved-grid">
                    <For
                        each=move || shortlist.saved.with(|s| s.as_slice().to_vec())
                        key=|grant| grant.id.clone()
                        children=move |grant| view! { <SavedGrantBox grant=grant /> }
                    />
                </div>
            </Show>
        </div>
    }
}

/// One shortlisted grant
#[component]
pub fn SavedGrantBox(grant: Grant) -> impl IntoView {
    let store = use_app_store();
    let shortlist = use_shortlist();

    let id = grant.id.clone();
    let money = short_money(grant.funding_amount.as_ref());
    let title = grant.title.clone();

    view! {
        <div class="saved-box">
            <div class="saved-box-text">
                <span class="saved-title">{title}</span>
                <span class="saved-money">{money}</span>
            </div>
            <ConfirmButton
                label="×"
                prompt="Remove?"
                button_class="delete-btn"
                on_confirm=move |_| {
                    log::info!("[SAVED] removed {}", id);
                    shortlist.remove(&id);
                }
            />
            <button class="apply-btn" on:click=move |_| store_open_apply(&store, &grant)>
                "Apply"
            </button>
        </div>
    }
}
