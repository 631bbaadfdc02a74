//! Storage Warning Component
//!
//! Non-blocking banner shown when local storage rejects a write.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn StorageWarning() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.warning.get().map(|message| view! {
            <div class="storage-warning" role="status">
                <span>{message}</span>
                <button class="dismiss-btn" title="Dismiss" on:click=move |_| ctx.dismiss_warning()>"×"</button>
            </div>
        })
    }
}
