//! Clear All Button Component
//!
//! Inline confirmation before emptying the whole list.

use leptos::prelude::*;

use crate::context::AppContext;

/// Shows "Clear all" initially. When clicked, asks for confirmation with ✓/✗ buttons.
#[component]
pub fn ClearAllButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="clear-all-btn"
                on:click=move |_| set_confirming.set(true)
            >
                "Clear all"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="clear-confirm">
                <span class="clear-confirm-text">"Remove every task?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        ctx.update(|list| list.clear());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |_| set_confirming.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
