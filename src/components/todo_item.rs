//! Todo Item Component
//!
//! A single task row, with the inline editor swapped in while editing.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Task;

/// A single task row
#[component]
pub fn TodoItem(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let completed = task.completed;
    let text = task.text;
    let is_editing = move || ctx.todos.with(|list| list.is_editing(id));

    view! {
        <div class=if completed { "todo-item completed" } else { "todo-item" }>
            // Checkbox
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| ctx.update(|list| list.toggle(id))
            />

            // Text, or the editor
            <Show
                when=is_editing
                fallback=move || view! { <span class="todo-text">{text.clone()}</span> }
            >
                <EditField />
            </Show>

            // Edit button
            <button class="edit-btn" title="Edit" on:click=move |_| ctx.start_edit(id)>"✎"</button>

            // Delete button
            <button class="delete-btn" title="Delete" on:click=move |_| ctx.update(|list| list.remove(id))>"×"</button>
        </div>
    }
}

/// Inline editor bound to the draft signal.
/// Enter saves, Escape cancels, losing focus saves.
#[component]
fn EditField() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus once mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <input
            type="text"
            class="edit-input"
            node_ref=input_ref
            prop:value=move || ctx.draft.get()
            on:input=move |ev| ctx.update_draft(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                "Enter" => ctx.save_edit(),
                "Escape" => ctx.cancel_edit(),
                _ => {}
            }
            on:blur=move |_| ctx.save_edit()
        />
    }
}
