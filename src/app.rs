//! Grant Deck Frontend App
//!
//! Root component: provides the store, shortlist, and swipe state, and
//! switches between the four tabs.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_swipe::{bind_global_pointerup, create_swipe_signals, SwipeDirection, SwipeOutcome, SwipeSignals};
use reactive_stores::Store;

use crate::components::{ApplicationForm, ApplyForm, DeckView, FilterSheet, Header, LogPanel, SavedGrid, TabBar};
use crate::config::{load_config, AppConfig};
use crate::context::ShortlistContext;
use crate::dataset::{load_grants, load_organizations};
use crate::shortlist::SavedGrants;
use crate::store::{store_advance_deck, AppState, AppStateStoreFields, AppStore, Tab};
use crate::submission::LocalStorage;

fn startup_config() -> AppConfig {
    match LocalStorage::open() {
        Ok(storage) => load_config(&storage),
        Err(e) => {
            log::warn!("[CONFIG] {}; using defaults", e);
            AppConfig::default()
        }
    }
}

/// A committed or sprung-back gesture. The deck advances only after the
/// exit animation so the card is seen leaving.
fn on_swipe_release(store: AppStore, shortlist: ShortlistContext, swipe: SwipeSignals, outcome: SwipeOutcome) {
    let config = swipe.config();
    match outcome {
        SwipeOutcome::Commit(direction) => {
            let top = store.deck().with_untracked(|d| d.top().cloned());
            let Some(grant) = top else {
                swipe.reset();
                return;
            };
            match direction {
                SwipeDirection::Right => {
                    let added = shortlist.add(grant.clone());
                    log::info!("[DECK] saved {} (new: {})", grant.id, added);
                }
                SwipeDirection::Left => log::info!("[DECK] passed {}", grant.id),
            }
            spawn_local(async move {
                TimeoutFuture::new(config.exit_duration_ms).await;
                // A re-sort during the animation already reset the swipe
                if store_advance_deck(&store, &grant.id) {
                    swipe.finish_exit();
                }
            });
        }
        SwipeOutcome::SpringBack => {
            spawn_local(async move {
                TimeoutFuture::new(config.spring_duration_ms).await;
                swipe.settle();
            });
        }
        SwipeOutcome::Ignored => {}
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = startup_config();
    let grants = load_grants();
    let organizations = load_organizations();
    log::info!(
        "[DECK] {} grants, {} organization types, page size {}",
        grants.len(),
        organizations.len(),
        config.page_size
    );

    let store = Store::new(AppState::new(config, grants));
    let shortlist = ShortlistContext::new(signal(SavedGrants::default()));
    let swipe = create_swipe_signals(config.swipe);

    provide_context(store);
    provide_context(shortlist);
    provide_context(swipe);

    bind_global_pointerup(swipe, move |outcome| on_swipe_release(store, shortlist, swipe, outcome));

    let (filter_open, set_filter_open) = signal(false);
    let (log_open, set_log_open) = signal(false);

    let active_view = move || match store.tab().get() {
        Tab::Match => view! { <DeckView /> }.into_any(),
        Tab::Saved => view! { <SavedGrid /> }.into_any(),
        Tab::Apply => view! { <ApplyForm /> }.into_any(),
        Tab::Application => view! { <ApplicationForm organizations=organizations.clone() /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <Header set_filter_open=set_filter_open set_log_open=set_log_open />
            <main class="main-content">{active_view}</main>
            <TabBar />
            <FilterSheet open=filter_open set_open=set_filter_open />
            <LogPanel open=log_open set_open=set_log_open />
        </div>
    }
}
