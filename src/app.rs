//! Pedalboard Designer App
//!
//! Root component: provides the store, context and drag state, runs the
//! startup effects (snapshot hydration, catalog fetch, geolocation,
//! viewport tracking, persistence) and lays out the three fixed regions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::catalog;
use crate::components::{BoardCanvas, Sidebar, TabStrip};
use crate::config::TOP_BAR_HEIGHT;
use crate::context::{AppContext, AppDnd, DragSource, Selection};
use crate::geometry::{clamp_to_stage, stage_size, Point, Size};
use crate::models::ItemKind;
use crate::shops;
use crate::snapshot::{self, Snapshot};
use crate::store::{with_session, AppState, AppStateStoreFields, AppStore};
use leptos_dragdrop::{bind_global, create_dnd_signals};
use reactive_stores::Store;

fn window_viewport() -> Size {
    let Some(win) = web_sys::window() else {
        return Size::default();
    };
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(w, h)
}

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    let (viewport, set_viewport) = signal(window_viewport());
    let (selection, set_selection) = signal(None::<Selection>);
    let (hydrated, set_hydrated) = signal(false);

    let ctx = AppContext::new(
        (viewport, set_viewport),
        (selection, set_selection),
        (hydrated, set_hydrated),
    );
    provide_context(ctx);

    let dnd: AppDnd = create_dnd_signals();
    provide_context(dnd);

    // Hydrate from localStorage before anything can save
    Effect::new(move |_| {
        let Snapshot {
            session,
            language,
            units,
        } = snapshot::load();
        store.session().set(session);
        store.language().set(language);
        store.units().set(units);
        store.country().set(shops::DEFAULT_COUNTRY.to_string());
        ctx.mark_hydrated();
    });

    // Persist on every data change after hydration
    Effect::new(move |_| {
        let session = store.session().get();
        let language = store.language().get();
        let units = store.units().get();
        // Never clobber a real blob with defaults before hydration, or
        // with geometry from a zero-sized viewport
        if !ctx.hydrated.get_untracked() || viewport.get_untracked().w <= 0.0 {
            return;
        }
        snapshot::save(&Snapshot {
            session,
            language,
            units,
        });
    });

    // Suppresses late async writes after the app unmounts
    let cancelled = StoredValue::new(false);
    on_cleanup(move || cancelled.set_value(true));

    // Remote catalog; errors leave an empty library rather than blocking
    Effect::new(move |_| {
        spawn_local(async move {
            let outcome = catalog::load_library().await;
            if cancelled.get_value() {
                return;
            }
            match outcome {
                Ok(library) => store.library().set(library),
                Err(err) => {
                    log::error!("{err}");
                    store.library_error().set(Some(err.to_string()));
                }
            }
            store.library_loaded().set(true);
        });
    });

    // Jurisdiction for the buy-online links
    Effect::new(move |_| {
        spawn_local(async move {
            let country = shops::detect_country().await;
            if !cancelled.get_value() {
                store.country().set(country);
            }
        });
    });

    // Track the browser viewport for stage geometry
    Effect::new(move |_| {
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            ctx.set_viewport(window_viewport());
        });
        if let Some(win) = web_sys::window() {
            let _ = win
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        on_resize.forget();
    });

    // Global drag wiring: canvas items track the pointer with live
    // clamping; tab drops reorder the project list.
    let on_move = move |payload: DragSource, client_x: f64, client_y: f64| {
        let DragSource::Canvas { kind, instance_id } = payload else {
            return;
        };
        let stage = stage_size(viewport.get_untracked());
        let candidate = Point::new(client_x, client_y - TOP_BAR_HEIGHT);
        let (rotation, zoom) = store.session().with_untracked(|session| {
            let project = session.active_project();
            let items = match kind {
                ItemKind::Pedal => &project.board_pedals,
                ItemKind::Board => &project.selected_boards,
            };
            let rotation = items
                .iter()
                .find(|i| i.instance_id == instance_id)
                .map(|i| i.rotation)
                .unwrap_or(0);
            (rotation, project.zoom)
        });
        let clamped = clamp_to_stage(
            ctx.size_of(instance_id),
            rotation,
            zoom,
            stage,
            candidate,
        );
        with_session(&store, |session| {
            session.move_item_to(kind, instance_id, clamped);
        });
    };
    let on_drop = move |payload: DragSource, slot: Option<usize>| {
        if let (DragSource::Tab { index }, Some(to)) = (payload, slot) {
            with_session(&store, |session| session.move_project(index, to));
        }
    };
    Effect::new(move |prev: Option<()>| {
        // Document listeners only once
        if prev.is_none() {
            bind_global(dnd, on_move, on_drop);
        }
    });

    view! {
        <div class="app-layout">
            <TabStrip />
            <div class="app-main">
                <BoardCanvas />
                <Sidebar />
            </div>
        </div>
    }
}
