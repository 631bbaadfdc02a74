//! Todo App
//!
//! Root component: loads persisted state once and lays out the list view.

use leptos::prelude::*;

use crate::components::{ClearAllButton, NewTodoForm, StorageWarning, ThemeToggle, TodoListView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    // Startup read sequence (theme, then todos) happens before the first render
    let ctx = AppContext::load(AppConfig::default());
    provide_context(ctx);

    theme::watch_system_theme(ctx.config(), move |prefers_dark| ctx.follow_system_theme(prefers_dark));

    let todos = ctx.todos;
    let is_empty = move || todos.with(|list| list.is_empty());

    view! {
        <div class="app-layout">
            <main class="main-content">
                <div class="app-header">
                    <h1>"Todo App"</h1>
                    <ThemeToggle />
                </div>

                <StorageWarning />

                <NewTodoForm />

                <Show when=move || !is_empty()>
                    <div class="list-summary">
                        <p class="todo-count">
                            {move || todos.with(|list| format!("Completed {} / Total {}", list.completed_count(), list.len()))}
                        </p>
                        <ClearAllButton />
                    </div>
                </Show>

                <TodoListView />

                <Show when=is_empty>
                    <p class="empty-state">"Nothing to do yet. Add a task above!"</p>
                </Show>
            </main>
        </div>
    }
}
