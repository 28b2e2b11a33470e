//! Board Canvas Component
//!
//! The stage: renders the active project's board hardware under its
//! pedals, hosts the zoom controls and the power/weight totals, and
//! handles ctrl/cmd + wheel zooming.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::canvas_item::CanvasItem;
use crate::config::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use crate::context::use_app_context;
use crate::i18n::translate;
use crate::models::ItemKind;
use crate::store::{use_app_store, with_session, AppStateStoreFields};
use crate::units::format_total_weight;

#[component]
pub fn BoardCanvas() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let stage_ref = NodeRef::<html::Div>::new();

    let t = move |key: &str| translate(store.language().get(), key).to_string();

    let zoom = Memo::new(move |_| {
        store.session().with(|session| session.active_project().zoom)
    });
    let board_ids = Memo::new(move |_| {
        store.session().with(|session| {
            session
                .active_project()
                .selected_boards
                .iter()
                .map(|i| i.instance_id)
                .collect::<Vec<_>>()
        })
    });
    let pedal_ids = Memo::new(move |_| {
        store.session().with(|session| {
            session
                .active_project()
                .board_pedals
                .iter()
                .map(|i| i.instance_id)
                .collect::<Vec<_>>()
        })
    });

    // (draw mA, weight g) across the active project
    let totals = Memo::new(move |_| {
        store.session().with(|session| {
            let project = session.active_project();
            let draw: f64 = project.board_pedals.iter().map(|i| i.item.draw).sum();
            let weight: f64 = project
                .board_pedals
                .iter()
                .chain(&project.selected_boards)
                .map(|i| i.item.weight)
                .sum();
            (draw, weight)
        })
    });

    let set_zoom = move |delta: i32| {
        with_session(&store, |session| session.set_zoom(delta));
    };

    // Browser-level zoom must stay suppressed while the pointer is over the
    // stage, so the wheel listener has to be non-passive.
    Effect::new(move |_| {
        let Some(stage) = stage_ref.get() else {
            return;
        };
        let on_wheel = Closure::<dyn FnMut(web_sys::WheelEvent)>::new(
            move |ev: web_sys::WheelEvent| {
                if !(ev.ctrl_key() || ev.meta_key()) {
                    return;
                }
                ev.prevent_default();
                set_zoom(if ev.delta_y() < 0.0 { ZOOM_STEP } else { -ZOOM_STEP });
            },
        );
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        let _ = stage
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                on_wheel.as_ref().unchecked_ref(),
                &options,
            );
        on_wheel.forget();
    });

    view! {
        <div class="board-canvas" node_ref=stage_ref on:click=move |_| ctx.clear_selection()>
            <For each=move || board_ids.get() key=|id| *id let:id>
                <CanvasItem kind=ItemKind::Board instance_id=id />
            </For>
            <For each=move || pedal_ids.get() key=|id| *id let:id>
                <CanvasItem kind=ItemKind::Pedal instance_id=id />
            </For>

            <div class="canvas-overlay" on:click=move |ev| ev.stop_propagation()>
                <div class="canvas-totals">
                    <span>
                        {move || {
                            format!("{}: {:.0} mA", t("canvas.totalDraw"), totals.get().0)
                        }}
                    </span>
                    <span>
                        {move || {
                            format!(
                                "{}: {}",
                                t("canvas.totalWeight"),
                                format_total_weight(totals.get().1, store.units().get()),
                            )
                        }}
                    </span>
                </div>
                <div class="zoom-controls">
                    <button
                        class="zoom-btn"
                        disabled=move || zoom.get() <= ZOOM_MIN
                        on:click=move |_| set_zoom(-ZOOM_STEP)
                    >
                        "−"
                    </button>
                    <button
                        class="zoom-reset"
                        title="100%"
                        on:click=move |_| {
                            with_session(&store, |session| session.reset_zoom());
                        }
                    >
                        {move || format!("{}%", zoom.get())}
                    </button>
                    <button
                        class="zoom-btn"
                        disabled=move || zoom.get() >= ZOOM_MAX
                        on:click=move |_| set_zoom(ZOOM_STEP)
                    >
                        "+"
                    </button>
                </div>
            </div>
        </div>
    }
}
