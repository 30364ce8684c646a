//! Leptos Sortable List Utilities
//!
//! Mouse-driven reordering for flat vertical lists.
//! Uses a movement threshold to distinguish click from drag; drops land on
//! slot indices between rows (slot 0 = before the first row, slot `len` =
//! after the last row).

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Sortable state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Slot index the pointer is currently over
    pub drop_slot_read: ReadSignal<Option<usize>>,
    pub drop_slot_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_sort_signals() -> SortSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_slot_read, drop_slot_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_id_read,
        dragging_id_write,
        drop_slot_read,
        drop_slot_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(sort: &SortSignals) {
    sort.dragging_id_write.set(None);
    sort.drop_slot_write.set(None);
    sort.pending_id_write.set(None);
    sort.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = sort.drag_just_ended_write;
        // try_set: the timer can outlive the sortable view
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            let _ = clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(sort: SortSignals, row_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            sort.pending_id_write.set(Some(row_id));
            sort.start_x_write.set(ev.client_x());
            sort.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for drop slots
pub fn make_on_slot_mouseenter(sort: SortSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_id_read.get_untracked().is_some() {
            sort.drop_slot_write.set(Some(slot));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(sort: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_id_read.get_untracked().is_some() {
            sort.drop_slot_write.set(None);
        }
    }
}

/// Window mousemove listener - starts drag once moved beyond the threshold.
/// The listener is dropped with the reactive owner that bound it, so a
/// sortable view can be mounted and unmounted freely.
pub fn bind_global_mousemove(sort: SortSignals) {
    window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && sort.dragging_id_read.get_untracked().is_none() {
            let start_x = sort.start_x_read.get_untracked();
            let start_y = sort.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                sort.dragging_id_write.set(pending);
            }
        }
    });
}

/// Bind window mouseup handler for drop detection
pub fn bind_global_mouseup<F>(sort: SortSignals, on_drop: F)
where
    F: Fn(u32, usize) + Clone + 'static,
{
    window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let dragging_id = sort.dragging_id_read.get_untracked();
        let drop_slot = sort.drop_slot_read.get_untracked();

        // Clear pending state first
        sort.pending_id_write.set(None);

        // If we were actually dragging (not just clicking)
        if let (Some(dragged), Some(slot)) = (dragging_id, drop_slot) {
            end_drag(&sort);
            on_drop(dragged, slot);
        } else {
            // Not dragging - just end any pending state
            end_drag(&sort);
            // Click event will fire naturally on the element
        }
    });

    // Also bind global mousemove
    bind_global_mousemove(sort);
}
