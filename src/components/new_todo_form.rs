//! New Todo Form Component
//!
//! Text input for appending tasks to the end of the list.

use leptos::prelude::*;

use crate::context::{now_ms, AppContext};

/// Form for creating new tasks (Enter or the Add button submits)
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if text.trim().is_empty() { return; }

        ctx.update(|list| list.add(&text, now_ms()).is_some());
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
