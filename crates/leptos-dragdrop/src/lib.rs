//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for Leptos with a movement threshold to
//! distinguish click from drag. Generic over the dragged payload: the
//! same signals drive free positioning (via the move callback) and
//! slot reordering (via the hover index).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals for payload type `S`.
#[derive(Clone, Copy)]
pub struct DndSignals<S: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<S>>,
    pub dragging_write: WriteSignal<Option<S>>,
    /// Hovered drop slot index (for reorder targets)
    pub hover_slot_read: ReadSignal<Option<usize>>,
    pub hover_slot_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending payload (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<S>>,
    pub pending_write: WriteSignal<Option<S>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Pointer offset from the grabbed element's center at mousedown
    pub grab_dx_read: ReadSignal<f64>,
    pub grab_dx_write: WriteSignal<f64>,
    pub grab_dy_read: ReadSignal<f64>,
    pub grab_dy_write: WriteSignal<f64>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<S: Clone + Copy + Send + Sync + 'static>() -> DndSignals<S> {
    let (dragging_read, dragging_write) = signal(None::<S>);
    let (hover_slot_read, hover_slot_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<S>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (grab_dx_read, grab_dx_write) = signal(0f64);
    let (grab_dy_read, grab_dy_write) = signal(0f64);
    DndSignals {
        dragging_read,
        dragging_write,
        hover_slot_read,
        hover_slot_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        grab_dx_read,
        grab_dx_write,
        grab_dy_read,
        grab_dy_write,
    }
}

/// End drag operation. `drag_just_ended` stays set for 100ms so click
/// handlers can tell a drop apart from a plain click.
pub fn end_drag<S: Clone + Copy + Send + Sync + 'static>(dnd: &DndSignals<S>, was_dragging: bool) {
    dnd.dragging_write.set(None);
    dnd.hover_slot_write.set(None);
    dnd.pending_write.set(None);
    if !was_dragging {
        return;
    }
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable items.
/// Records the pending payload with the start position; `grab_dx`/`grab_dy`
/// capture where inside the element the user grabbed, so a drag moves the
/// element without snapping its center to the pointer.
pub fn make_on_mousedown<S>(
    dnd: DndSignals<S>,
    payload: S,
    center_x: f64,
    center_y: f64,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    S: Clone + Copy + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                    return;
                }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                    return;
                }
            }
            dnd.pending_write.set(Some(payload));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
            dnd.grab_dx_write.set(f64::from(ev.client_x()) - center_x);
            dnd.grab_dy_write.set(f64::from(ev.client_y()) - center_y);
        }
    }
}

/// Create mouseenter handler for a drop slot (reorder target).
pub fn make_on_slot_mouseenter<S>(
    dnd: DndSignals<S>,
    slot: usize,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    S: Clone + Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.hover_slot_write.set(Some(slot));
        }
    }
}

/// Bind the document-level mousemove/mouseup pair that drives a drag.
///
/// `on_move` runs on every mousemove while dragging, with the payload and
/// the pointer position corrected by the grab offset. `on_drop` runs on
/// mouseup after a real drag (threshold exceeded), with the hovered slot
/// if any. Plain clicks reach neither callback.
pub fn bind_global<S, M, F>(dnd: DndSignals<S>, on_move: M, on_drop: F)
where
    S: Clone + Copy + Send + Sync + 'static,
    M: Fn(S, f64, f64) + 'static,
    F: Fn(S, Option<usize>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        // Promote a pending grab to a drag once the pointer moved enough
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }

        if let Some(payload) = dnd.dragging_read.get_untracked() {
            let x = f64::from(ev.client_x()) - dnd.grab_dx_read.get_untracked();
            let y = f64::from(ev.client_y()) - dnd.grab_dy_read.get_untracked();
            on_move(payload, x, y);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let slot = dnd.hover_slot_read.get_untracked();

        dnd.pending_write.set(None);

        if let Some(payload) = dragging {
            end_drag(&dnd, true);
            on_drop(payload, slot);
        } else {
            // Not dragging - click event will fire naturally on the element
            end_drag(&dnd, false);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc
                .add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ =
                doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}
