//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::deck::Deck;
use crate::models::{Grant, GrantId};
use crate::sort::{sort_grants, SortSpec};

/// Top-level views
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Match,
    Saved,
    Apply,
    Application,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Match, Tab::Saved, Tab::Apply, Tab::Application];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Match => "Match",
            Tab::Saved => "Saved",
            Tab::Apply => "Apply",
            Tab::Application => "Application",
        }
    }
}

/// Values carried from a saved grant into the quick application form
#[derive(Clone, Debug, PartialEq)]
pub struct ApplyPrefill {
    pub grant_id: String,
    pub grant_title: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub config: AppConfig,
    /// Dataset in source order
    pub grants: Vec<Grant>,
    /// Sorted dataset, paged
    pub deck: Deck<Grant>,
    pub sort: SortSpec,
    pub tab: Tab,
    pub apply_prefill: Option<ApplyPrefill>,
}

impl AppState {
    pub fn new(config: AppConfig, grants: Vec<Grant>) -> Self {
        let deck = Deck::new(grants.clone(), config.page_size);
        Self {
            config,
            grants,
            deck,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Re-sort the dataset and restart the deck at its first page
pub fn store_apply_sort(store: &AppStore, spec: SortSpec) {
    let mut grants = store.grants().get_untracked();
    sort_grants(&mut grants, spec);
    let page_size = store.config().with_untracked(|c| c.page_size);
    store.sort().set(spec);
    store.deck().set(Deck::new(grants, page_size));
}

/// Move past `decided` if it is still the top card. A deck replaced
/// while the exit animation ran (re-sort, next page) is left untouched.
pub fn store_advance_deck(store: &AppStore, decided: &GrantId) -> bool {
    let still_top = store
        .deck()
        .with_untracked(|d| d.top().is_some_and(|g| &g.id == decided));
    if still_top {
        store.deck().write().advance();
    } else {
        log::debug!("[DECK] {} no longer on top, not advancing", decided);
    }
    still_top
}

/// Next page; false when the dataset is exhausted
pub fn store_load_more(store: &AppStore) -> bool {
    store.deck().write().load_more()
}

/// Open the quick application form for a grant
pub fn store_open_apply(store: &AppStore, grant: &Grant) {
    store.apply_prefill().set(Some(ApplyPrefill {
        grant_id: grant.id.to_string(),
        grant_title: grant.title.clone(),
    }));
    store.tab().set(Tab::Apply);
}
