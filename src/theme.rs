//! Theme Handling
//!
//! OS color-scheme signal and the `<html>` class that switches styling.
//! Requires a browser environment; every call degrades to a no-op without one.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::AppConfig;
use crate::models::Theme;

fn media_query(config: &AppConfig) -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(config.dark_media_query).ok().flatten()
}

/// Does the OS currently prefer a dark color scheme?
pub fn system_prefers_dark(config: &AppConfig) -> bool {
    media_query(config).is_some_and(|mq| mq.matches())
}

/// Toggle the dark class on the document element
pub fn apply(theme: Theme, config: &AppConfig) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force(config.dark_class, theme.is_dark()) {
        log::warn!("[THEME] failed to apply {}: {:?}", theme.as_str(), e);
    }
}

/// Call `on_change(prefers_dark)` whenever the OS color scheme flips.
pub fn watch_system_theme<F>(config: &AppConfig, on_change: F)
where
    F: Fn(bool) + 'static,
{
    let Some(mq) = media_query(config) else {
        return;
    };
    let listener = mq.clone();
    let on_media_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        on_change(listener.matches());
    });
    if let Err(e) = mq.add_event_listener_with_callback("change", on_media_change.as_ref().unchecked_ref()) {
        log::warn!("[THEME] could not watch system theme: {:?}", e);
    }
    on_media_change.forget();
}
