//! App Configuration
//!
//! Storage keys and display settings, fixed at build time.

/// Storage and display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// localStorage key for the JSON task list
    pub todos_key: &'static str,
    /// localStorage key for the theme preference
    pub theme_key: &'static str,
    /// Class toggled on `<html>` in dark mode
    pub dark_class: &'static str,
    /// Media query for the OS color-scheme preference
    pub dark_media_query: &'static str,
    /// How long the storage warning stays visible
    pub warning_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            todos_key: "todos",
            theme_key: "theme",
            dark_class: "dark",
            dark_media_query: "(prefers-color-scheme: dark)",
            warning_timeout_ms: 4_000,
        }
    }
}
