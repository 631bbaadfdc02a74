//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Light/dark switch. Shows the sun in dark mode and the moon in light mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let is_dark = move || ctx.theme.get().is_dark();

    view! {
        <button
            class="theme-toggle"
            title=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            aria-label="Toggle dark mode"
            on:click=move |_| ctx.toggle_theme()
        >
            {move || if is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
