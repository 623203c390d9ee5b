//! Tab Bar Component
//!
//! Bottom navigation between the four views.

use leptos::prelude::*;

use crate::context::use_shortlist;
use crate::store::{use_app_store, AppStateStoreFields, Tab};

#[component]
pub fn TabBar() -> impl IntoView {
    let store = use_app_store();
    let shortlist = use_shortlist();

    view! {
        <nav class="tab-bar">
            {Tab::ALL.into_iter().map(|tab| {
                let is_active = move || store.tab().get() == tab;
                let tab_class = move || if is_active() { "tab active" } else { "tab" };
                let badge = move || {
                    let count = shortlist.saved.with(|s| s.len());
                    (tab == Tab::Saved && count > 0).then(|| view! { <span class="badge">{count}</span> })
                };
                view! {
                    <button class=tab_class on:click=move |_| store.tab().set(tab)>
                        {tab.label()}
                        {badge}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
