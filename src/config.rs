//! App Configuration
//!
//! Defaults compiled in; an optional JSON override may be placed in
//! local storage under `grant_deck_config`.

use leptos_swipe::SwipeConfig;
use serde::{Deserialize, Serialize};

use crate::deck::DEFAULT_PAGE_SIZE;
use crate::submission::KeyValueStore;

pub const CONFIG_KEY: &str = "grant_deck_config";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cards per deck page
    pub page_size: usize,
    pub swipe: SwipeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            swipe: SwipeConfig::default(),
        }
    }
}

impl AppConfig {
    fn sanitized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self
    }
}

/// Stored override, falling back to defaults when missing or unreadable
pub fn load_config(storage: &impl KeyValueStore) -> AppConfig {
    let raw = match storage.get_item(CONFIG_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return AppConfig::default(),
        Err(e) => {
            log::warn!("[CONFIG] storage unavailable, using defaults: {}", e);
            return AppConfig::default();
        }
    };

    match serde_json::from_str::<AppConfig>(&raw) {
        Ok(config) => config.sanitized(),
        Err(e) => {
            log::warn!("[CONFIG] ignoring unreadable {}: {}", CONFIG_KEY, e);
            AppConfig::default()
        }
    }
}
