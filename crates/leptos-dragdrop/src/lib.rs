//! Leptos DragDrop Utilities
//!
//! Mouse-driven drag-and-drop for reordering a flat Leptos list by index.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the "just ended" flag stays up after a drop, in milliseconds
const DRAG_END_GRACE_MS: i32 = 100;

/// Drag session signals
#[derive(Clone, Copy)]
pub struct DragSession {
    /// Index being dragged (set once the threshold is crossed)
    pub source_read: ReadSignal<Option<usize>>,
    pub source_write: WriteSignal<Option<usize>>,
    /// Index currently hovered as the drop target
    pub hover_read: ReadSignal<Option<usize>>,
    pub hover_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl DragSession {
    /// Is the row at `index` the one being dragged?
    pub fn is_source(&self, index: usize) -> bool {
        self.source_read.get() == Some(index)
    }

    /// Is the row at `index` the current drop target?
    pub fn is_hovered(&self, index: usize) -> bool {
        self.source_read.get().is_some() && self.hover_read.get() == Some(index)
    }

    pub fn is_dragging(&self) -> bool {
        self.source_read.get().is_some()
    }
}

pub fn create_drag_session() -> DragSession {
    let (source_read, source_write) = signal(None::<usize>);
    let (hover_read, hover_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DragSession {
        source_read,
        source_write,
        hover_read,
        hover_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True once the pointer has travelled far enough from the press point
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

/// Resolve a finished gesture into a `(source, target)` move.
///
/// Dropping a row back onto itself is not a move.
pub fn resolve_drop(source: Option<usize>, hover: Option<usize>) -> Option<(usize, usize)> {
    match (source, hover) {
        (Some(from), Some(to)) if from != to => Some((from, to)),
        _ => None,
    }
}

/// End drag operation
pub fn end_drag(session: &DragSession) {
    session.source_write.set(None);
    session.hover_write.set(None);
    session.pending_write.set(None);
    session.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = session.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), DRAG_END_GRACE_MS);
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(session: DragSession, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            session.pending_write.set(Some(index));
            session.start_x_write.set(ev.client_x());
            session.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
fn bind_global_mousemove(session: DragSession) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = session.pending_read.get_untracked();

        if pending.is_some() && session.source_read.get_untracked().is_none() {
            let dx = ev.client_x() - session.start_x_read.get_untracked();
            let dy = ev.client_y() - session.start_y_read.get_untracked();

            if exceeds_threshold(dx, dy) {
                log::debug!("[DND] drag started at index {:?}", pending);
                session.source_write.set(pending);
                session.hover_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_mouseenter(session: DragSession, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if session.source_read.get_untracked().is_some() {
            session.hover_write.set(Some(index));
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop` receives `(source_index, target_index)` only for a real move.
pub fn bind_global_mouseup<F>(session: DragSession, on_drop: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let was_dragging = session.source_read.get_untracked().is_some();
        let drop = resolve_drop(session.source_read.get_untracked(), session.hover_read.get_untracked());

        session.pending_write.set(None);
        if !was_dragging {
            // Plain click, let it through untouched
            return;
        }

        end_drag(&session);
        if let Some((from, to)) = drop {
            log::debug!("[DND] drop: {} -> {}", from, to);
            on_drop(from, to);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(session);
}
