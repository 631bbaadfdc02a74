//! Frontend Models
//!
//! Data structures persisted to and restored from local storage.

use serde::{Deserialize, Serialize};

/// Stable task identifier, independent of list position
pub type TaskId = u64;

/// Task data structure (matches the stored JSON shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored preference. Anything other than "dark" is light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" { Theme::Dark } else { Theme::Light }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Inline edit in progress (never persisted)
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub id: TaskId,
    pub draft: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_json_shape() {
        let task = Task { id: 1700000000000, text: "buy milk".to_string(), completed: true };
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":1700000000000,"text":"buy milk","completed":true}"#);
    }

    #[test]
    fn test_task_missing_completed_defaults_false() {
        let task: Task = serde_json::from_str(r#"{"id":7,"text":"a"}"#).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored("sepia"), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().as_str(), "dark");
    }
}
