//! Todo List View Component
//!
//! Renders the ordered task list with drag-and-drop reordering.
//! Dropping a row onto another moves it to that row's index.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::AppContext;

use leptos_dragdrop::*;

/// Task list with DnD support
#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let session = create_drag_session();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(session, move |from, to| {
        ctx.update(|list| list.reorder(from, to));
    });

    let rows = move || {
        ctx.todos.with(|list| list.tasks().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <ul class=move || if session.is_dragging() { "todo-list dragging-active" } else { "todo-list" }>
            <For
                each=rows
                key=|(index, task)| {
                    // Every displayed field is part of the key so edits re-render the row
                    (*index, task.id, task.text.clone(), task.completed)
                }
                children=move |(index, task)| {
                    let id = task.id;

                    let on_mousedown = make_on_mousedown(session, index);
                    let on_mouseenter = make_on_mouseenter(session, index);

                    let row_class = move || {
                        let mut c = String::from("todo-row");
                        if session.is_source(index) {
                            c.push_str(" dragging");
                        } else if session.is_hovered(index) {
                            c.push_str(" drop-target");
                        }
                        c
                    };

                    view! {
                        <li
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:dblclick=move |_| {
                                if session.drag_just_ended_read.get_untracked() { return; }
                                if !ctx.todos.with_untracked(|list| list.is_editing(id)) {
                                    ctx.start_edit(id);
                                }
                            }
                        >
                            <TodoItem task=task />
                        </li>
                    }
                }
            />
        </ul>
    }
}
