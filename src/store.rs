//! Persisted Application State
//!
//! Reads and writes the two storage slots ("todos" and "theme").
//! The task list is never written before the initial load has run, so an
//! empty startup state cannot clobber saved data.

use crate::config::AppConfig;
use crate::models::{Task, Theme};
use crate::storage::{KeyValueStore, StorageResult};
use crate::todo_list::TodoList;

pub struct TodoStore<S> {
    backend: S,
    config: AppConfig,
    loaded: bool,
}

impl<S: KeyValueStore> TodoStore<S> {
    pub fn new(backend: S, config: AppConfig) -> Self {
        Self {
            backend,
            config,
            loaded: false,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Load the task list. Missing, unreadable, or malformed data yields an
    /// empty list; in every case writes are enabled afterwards.
    pub fn load_todos(&mut self) -> TodoList {
        self.loaded = true;
        let raw = match self.backend.get(self.config.todos_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return TodoList::new(),
            Err(e) => {
                log::warn!("[STORE] could not read {:?}: {}", self.config.todos_key, e);
                return TodoList::new();
            }
        };
        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                log::debug!("[STORE] loaded {} tasks", tasks.len());
                TodoList::from_tasks(tasks)
            }
            Err(e) => {
                log::warn!("[STORE] ignoring malformed {:?} value: {}", self.config.todos_key, e);
                TodoList::new()
            }
        }
    }

    /// Write the task list back. Returns `Ok(false)` while the initial load is pending.
    pub fn save_todos(&self, tasks: &[Task]) -> StorageResult<bool> {
        if !self.is_loaded() {
            log::debug!("[STORE] skipping save before initial load");
            return Ok(false);
        }
        let json = serde_json::to_string(tasks)?;
        self.backend.set(self.config.todos_key, &json)?;
        Ok(true)
    }

    /// Run a list mutation and write the list back only if it reports a change.
    ///
    /// The mutation stays applied in memory when the write fails.
    pub fn commit<F>(&self, list: &mut TodoList, mutate: F) -> StorageResult<bool>
    where
        F: FnOnce(&mut TodoList) -> bool,
    {
        if !mutate(list) {
            return Ok(false);
        }
        self.save_todos(list.tasks())
    }

    /// The stored theme, if the user ever chose one
    pub fn stored_theme(&self) -> Option<Theme> {
        match self.backend.get(self.config.theme_key) {
            Ok(value) => value.map(|v| Theme::from_stored(&v)),
            Err(e) => {
                log::warn!("[STORE] could not read {:?}: {}", self.config.theme_key, e);
                None
            }
        }
    }

    /// Stored preference first, then the OS signal
    pub fn load_theme(&self, system_prefers_dark: bool) -> Theme {
        self.stored_theme()
            .unwrap_or_else(|| Theme::from_dark(system_prefers_dark))
    }

    pub fn save_theme(&self, theme: Theme) -> StorageResult<()> {
        self.backend.set(self.config.theme_key, theme.as_str())
    }

    #[cfg(test)]
    pub fn into_backend(self) -> S {
        self.backend
    }
}
