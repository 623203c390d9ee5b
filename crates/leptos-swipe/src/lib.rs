//! Leptos Swipe Utilities
//!
//! Swipe-to-decide for a card stack using pointer events.
//! The press is bound on the card; move/up/cancel are bound on the
//! document so the drag keeps tracking outside the card.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

mod state;

pub use state::{Offset, SwipeConfig, SwipeDirection, SwipeOutcome, SwipePhase, SwipeState};

/// Swipe state signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub state_read: ReadSignal<SwipeState>,
    pub state_write: WriteSignal<SwipeState>,
}

pub fn create_swipe_signals(config: SwipeConfig) -> SwipeSignals {
    let (state_read, state_write) = signal(SwipeState::new(config));
    SwipeSignals {
        state_read,
        state_write,
    }
}

impl SwipeSignals {
    pub fn config(&self) -> SwipeConfig {
        self.state_read.with_untracked(|s| s.config)
    }

    /// Exit animation done
    pub fn finish_exit(&self) {
        self.state_write.update(|s| s.finish_exit());
    }

    /// Spring-back animation done
    pub fn settle(&self) {
        self.state_write.update(|s| s.settle());
    }

    pub fn reset(&self) {
        self.state_write.update(|s| s.reset());
    }

    /// Reactive CSS for the active card
    pub fn card_style(&self) -> String {
        self.state_read.with(|s| {
            format!(
                "transform: {}; transition: {};",
                s.transform_css(),
                s.transition_css()
            )
        })
    }
}

/// Create pointerdown handler for the active card
pub fn make_on_pointerdown(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        // Primary button, or any touch/pen contact
        if ev.button() != 0 && ev.pointer_type() == "mouse" {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        let x = ev.client_x() as f64;
        let y = ev.client_y() as f64;
        swipe.state_write.update(|s| {
            s.press(x, y);
        });
    }
}

/// Bind document pointermove so the active card follows the pointer
pub fn bind_global_pointermove(swipe: SwipeSignals) {
    use wasm_bindgen::closure::Closure;

    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        if !swipe.state_read.with_untracked(|s| s.is_dragging()) {
            return;
        }
        let x = ev.client_x() as f64;
        let y = ev.client_y() as f64;
        swipe.state_write.update(|s| s.move_to(x, y));
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref());
        }
    }
    on_pointermove.forget();
}

/// Bind document pointerup/pointercancel; `on_release` receives the outcome
/// of every release that ended an active drag
pub fn bind_global_pointerup<F>(swipe: SwipeSignals, on_release: F)
where
    F: Fn(SwipeOutcome) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |_ev: web_sys::PointerEvent| {
        let mut outcome = SwipeOutcome::Ignored;
        swipe.state_write.update(|s| outcome = s.release());
        if outcome != SwipeOutcome::Ignored {
            on_release(outcome);
        }
    });

    let on_pointercancel = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |_ev: web_sys::PointerEvent| {
        swipe.state_write.update(|s| s.cancel());
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("pointerup", on_pointerup.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("pointercancel", on_pointercancel.as_ref().unchecked_ref());
        }
    }
    on_pointerup.forget();
    on_pointercancel.forget();

    // Also bind global pointermove
    bind_global_pointermove(swipe);
}
