//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::models::{TaskId, Theme};
use crate::storage::{BrowserStorage, StorageError};
use crate::store::TodoStore;
use crate::theme;
use crate::todo_list::TodoList;

/// Wall clock in milliseconds, used to seed task ids
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Banner text for a task list write that the browser rejected
pub fn save_failure_message(err: &StorageError) -> String {
    format!("Changes could not be saved ({err}). They stay available until you close this tab.")
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Task list and edit session - read
    pub todos: ReadSignal<TodoList>,
    /// Task list and edit session - write
    set_todos: WriteSignal<TodoList>,
    /// Inline editor text - read
    pub draft: ReadSignal<String>,
    /// Inline editor text - write
    write_draft: WriteSignal<String>,
    /// Current theme - read
    pub theme: ReadSignal<Theme>,
    /// Current theme - write
    set_theme: WriteSignal<Theme>,
    /// Non-blocking storage warning - read
    pub warning: ReadSignal<Option<String>>,
    /// Non-blocking storage warning - write
    set_warning: WriteSignal<Option<String>>,
    store: StoredValue<TodoStore<BrowserStorage>>,
    config: AppConfig,
}

impl AppContext {
    /// Run the startup read sequence: theme first, then the task list.
    pub fn load(config: AppConfig) -> Self {
        let mut store = TodoStore::new(BrowserStorage, config);

        let initial_theme = store.load_theme(theme::system_prefers_dark(&config));
        theme::apply(initial_theme, &config);
        let list = store.load_todos();
        log::debug!("[APP] startup: theme={}, {} tasks", initial_theme.as_str(), list.len());

        let (todos, set_todos) = signal(list);
        let (draft, write_draft) = signal(String::new());
        let (theme, set_theme) = signal(initial_theme);
        let (warning, set_warning) = signal(None::<String>);
        Self {
            todos,
            set_todos,
            draft,
            write_draft,
            theme,
            set_theme,
            warning,
            set_warning,
            store: StoredValue::new(store),
            config,
        }
    }

    /// Apply a task list mutation and write the list back if it changed.
    pub fn update(&self, f: impl FnOnce(&mut TodoList) -> bool) {
        let store = self.store;
        let mut result = Ok(false);
        self.set_todos.update(|list| {
            result = store.with_value(|store| store.commit(list, f));
        });
        if let Err(e) = result {
            log::error!("[STORE] save failed: {}", e);
            self.warn(save_failure_message(&e));
        }
    }

    /// Change transient edit state only; nothing is written.
    fn edit(&self, f: impl FnOnce(&mut TodoList)) {
        self.set_todos.update(f);
    }

    /// Open the inline editor on `id`, seeding the draft with its text.
    pub fn start_edit(&self, id: TaskId) {
        let mut text = None;
        self.edit(|list| {
            if list.start_edit(id) {
                text = list.editing().map(|edit| edit.draft.clone());
            }
        });
        if let Some(text) = text {
            self.write_draft.set(text);
        }
    }

    /// Keystrokes only touch the draft signal, not the list
    pub fn update_draft(&self, text: String) {
        self.write_draft.set(text);
    }

    pub fn save_edit(&self) {
        let draft = self.draft.get_untracked();
        self.update(|list| {
            list.set_draft(draft);
            list.save_edit()
        });
    }

    pub fn cancel_edit(&self) {
        self.edit(|list| list.cancel_edit());
    }

    /// Flip the theme, apply it, and remember the choice.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
        theme::apply(next, &self.config);
        if let Err(e) = self.store.with_value(|store| store.save_theme(next)) {
            log::error!("[STORE] theme save failed: {}", e);
            self.warn(format!("Theme preference could not be saved ({e})."));
        }
    }

    /// Follow an OS color-scheme change unless the user picked a theme.
    pub fn follow_system_theme(&self, prefers_dark: bool) {
        if self.store.with_value(|store| store.stored_theme()).is_some() {
            return;
        }
        let next = Theme::from_dark(prefers_dark);
        log::debug!("[THEME] following system: {}", next.as_str());
        self.set_theme.set(next);
        theme::apply(next, &self.config);
    }

    /// Show a warning that hides itself after the configured timeout
    fn warn(&self, message: String) {
        self.set_warning.set(Some(message.clone()));
        let set_warning = self.set_warning;
        let timeout = self.config.warning_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            set_warning.update(|current| {
                if current.as_deref() == Some(message.as_str()) {
                    *current = None;
                }
            });
        });
    }

    pub fn dismiss_warning(&self) {
        self.set_warning.set(None);
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
