//! Confirm Button Component
//!
//! A button that asks before running a destructive shortlist action.

use leptos::prelude::*;

/// Shows `label`; once clicked, swaps to `prompt` with ✓/✗. Confirming
/// runs `on_confirm` and returns to the idle button.
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || {
                let label = label.clone();
                let title = label.clone();
                view! {
                    <button
                        class=button_class.clone()
                        title=title
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(true);
                        }
                    >
                        {label}
                    </button>
                }
            }
        >
            <span class="confirm-prompt">
                <span class="confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-yes"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="confirm-no"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
