//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::{Grant, GrantId};
use crate::shortlist::SavedGrants;

/// Saved-grants store: readers get the signal, writes go through methods
#[derive(Clone, Copy)]
pub struct ShortlistContext {
    /// Saved grants, most recent first - read
    pub saved: ReadSignal<SavedGrants>,
    /// Saved grants - write
    set_saved: WriteSignal<SavedGrants>,
}

impl ShortlistContext {
    pub fn new(saved: (ReadSignal<SavedGrants>, WriteSignal<SavedGrants>)) -> Self {
        Self {
            saved: saved.0,
            set_saved: saved.1,
        }
    }

    /// Keep a grant; duplicates are ignored
    pub fn add(&self, grant: Grant) -> bool {
        let mut inserted = false;
        self.set_saved.update(|saved| inserted = saved.add(grant));
        inserted
    }

    pub fn remove(&self, id: &GrantId) {
        self.set_saved.update(|saved| {
            saved.remove(id);
        });
    }

    pub fn clear(&self) {
        self.set_saved.update(|saved| saved.clear());
    }
}

pub fn use_shortlist() -> ShortlistContext {
    expect_context::<ShortlistContext>()
}
