//! Application Context
//!
//! Shared UI state provided via Leptos Context API: viewport metrics, the
//! sidebar selection, the rendered-size cache and the drag payload type.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::geometry::Size;
use crate::models::ItemKind;

/// What a mouse drag is carrying.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragSource {
    /// A placed item moving freely on the canvas
    Canvas { kind: ItemKind, instance_id: i64 },
    /// A project tab being reordered
    Tab { index: usize },
}

pub type AppDnd = DndSignals<DragSource>;

/// A placed item selected for the details panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub kind: ItemKind,
    pub instance_id: i64,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Browser viewport size - read
    pub viewport: ReadSignal<Size>,
    /// Browser viewport size - write
    set_viewport: WriteSignal<Size>,
    /// Placed item shown in the details panel (None = library view) - read
    pub selection: ReadSignal<Option<Selection>>,
    set_selection: WriteSignal<Option<Selection>>,
    /// Rendered sizes by instance id, for drag clamping. Rebuilt from the
    /// live render tree; never persisted.
    pub sizes: RwSignal<HashMap<i64, Size>>,
    /// True once the persisted snapshot has been applied; saves are
    /// suppressed before this to avoid clobbering the store with defaults.
    pub hydrated: ReadSignal<bool>,
    set_hydrated: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        viewport: (ReadSignal<Size>, WriteSignal<Size>),
        selection: (ReadSignal<Option<Selection>>, WriteSignal<Option<Selection>>),
        hydrated: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            viewport: viewport.0,
            set_viewport: viewport.1,
            selection: selection.0,
            set_selection: selection.1,
            sizes: RwSignal::new(HashMap::new()),
            hydrated: hydrated.0,
            set_hydrated: hydrated.1,
        }
    }

    pub fn set_viewport(&self, size: Size) {
        self.set_viewport.set(size);
    }

    /// Open the details panel for a placed item
    pub fn select(&self, selection: Selection) {
        self.set_selection.set(Some(selection));
    }

    /// Return to the library view
    pub fn clear_selection(&self) {
        self.set_selection.set(None);
    }

    pub fn mark_hydrated(&self) {
        self.set_hydrated.set(true);
    }

    /// Record the rendered box of a placed item
    pub fn record_size(&self, instance_id: i64, size: Size) {
        self.sizes.update(|sizes| {
            sizes.insert(instance_id, size);
        });
    }

    /// Drop the cache entry when a placement leaves the canvas
    pub fn forget_size(&self, instance_id: i64) {
        self.sizes.update(|sizes| {
            sizes.remove(&instance_id);
        });
    }

    /// Cached rendered box, if the item has been laid out yet
    pub fn size_of(&self, instance_id: i64) -> Option<Size> {
        self.sizes.with_untracked(|sizes| sizes.get(&instance_id).copied())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

pub fn use_dnd() -> AppDnd {
    expect_context::<AppDnd>()
}
