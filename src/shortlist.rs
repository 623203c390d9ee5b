//! Saved Grants
//!
//! Session shortlist of kept grants, most recently saved first,
//! unique by grant id.

use crate::models::{Grant, GrantId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedGrants {
    items: Vec<Grant>,
}

impl SavedGrants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend unless the id is already saved. Returns whether it was inserted.
    pub fn add(&mut self, grant: Grant) -> bool {
        if self.contains(&grant.id) {
            return false;
        }
        self.items.insert(0, grant);
        true
    }

    /// Returns whether a grant was removed
    pub fn remove(&mut self, id: &GrantId) -> bool {
        match self.items.iter().position(|g| &g.id == id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: &GrantId) -> bool {
        self.items.iter().any(|g| &g.id == id)
    }

    pub fn as_slice(&self) -> &[Grant] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
