//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The session
//! field is the single authoritative copy of all project data; components
//! never hold their own copies of projects or placements.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Library;
use crate::models::{Language, Units};
use crate::session::Session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All projects, the active target and the scratch board
    pub session: Session,
    /// Remote catalog, empty until the initial fetch lands
    pub library: Library,
    /// Set once the catalog fetch finished (ok or not)
    pub library_loaded: bool,
    /// Human-readable catalog failure, shown in the sidebar
    pub library_error: Option<String>,
    /// UI language
    pub language: Language,
    /// Display unit system
    pub units: Units,
    /// Detected jurisdiction for the buy-online links
    pub country: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a session mutation inside a single store write
pub fn with_session(store: &AppStore, f: impl FnOnce(&mut Session)) {
    f(&mut store.session().write());
}
