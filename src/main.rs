//! Grant Deck Frontend Entry Point

mod models;
mod dataset;
mod deck;
mod sort;
mod shortlist;
mod submission;
mod config;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = ring_logger::init_logger("GrantDeck", ring_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    mount_to_body(App);
}
