//! Deck View Component
//!
//! Card stack for the current page. The topmost card follows the
//! pointer; cards behind it are static.

use leptos::prelude::*;
use leptos_swipe::{make_on_pointerdown, SwipeSignals};

use crate::components::GrantCard;
use crate::store::{store_load_more, use_app_store, AppStateStoreFields};

/// Match screen
#[component]
pub fn DeckView() -> impl IntoView {
    let store = use_app_store();
    let swipe = expect_context::<SwipeSignals>();

    let remaining = move || store.deck().with(|d| d.remaining().to_vec());
    let has_cards = move || store.deck().with(|d| d.has_cards());
    let has_more_pages = move || store.deck().with(|d| d.has_more_pages());

    let on_load_more = move |_| {
        if store_load_more(&store) {
            swipe.reset();
            log::info!("[DECK] loaded page {}", store.deck().with_untracked(|d| d.page()));
        }
    };

    let on_pointerdown = make_on_pointerdown(swipe);

    view! {
        <div class="deck-area">
            // Back to front so the topmost card paints last
            {move || {
                remaining()
                    .into_iter()
                    .enumerate()
                    .rev()
                    .map(|(from_top, grant)| {
                        let z = format!("z-index: {};", 100usize.saturating_sub(from_top));
                        if from_top == 0 {
                            view! {
                                <div
                                    class="card-slot top"
                                    style=move || format!("{} {}", z, swipe.card_style())
                                    on:pointerdown=on_pointerdown
                                >
                                    <GrantCard grant=grant />
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="card-slot" style=z aria-hidden="true">
                                    <GrantCard grant=grant />
                                </div>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()
            }}

            <div class="cta" style=move || if has_cards() { "z-index: -1;" } else { "z-index: 1;" }>
                {move || if has_more_pages() {
                    view! {
                        <h2>"Show more grants"</h2>
                        <button class="cta-btn" on:click=on_load_more>"Load more"</button>
                    }.into_any()
                } else {
                    view! {
                        <h2>"No more grants"</h2>
                        <button class="cta-btn disabled" disabled=true>"No more grants"</button>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
