//! Canvas Item Component
//!
//! One placed rectangle on the stage. Looks its placement up reactively by
//! instance id so drags and rotations re-render in place, registers its
//! rendered box in the size cache, and arms the shared drag state on
//! mousedown.

use leptos::prelude::*;
use leptos_dragdrop::make_on_mousedown;

use crate::config::TOP_BAR_HEIGHT;
use crate::context::{use_app_context, use_dnd, DragSource, Selection};
use crate::geometry::{footprint_px, Size};
use crate::models::ItemKind;
use crate::store::{use_app_store, AppStateStoreFields};

const FALLBACK_COLOR: &str = "#52525b";

fn item_class(kind: ItemKind, selected: bool, dragging: bool) -> String {
    let mut class = format!("canvas-item {}", kind.as_str());
    if selected {
        class.push_str(" selected");
    }
    if dragging {
        class.push_str(" dragging");
    }
    class
}

#[component]
pub fn CanvasItem(kind: ItemKind, instance_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = use_dnd();

    let placed = Memo::new(move |_| {
        store.session().with(|session| {
            let project = session.active_project();
            let items = match kind {
                ItemKind::Pedal => &project.board_pedals,
                ItemKind::Board => &project.selected_boards,
            };
            items
                .iter()
                .find(|i| i.instance_id == instance_id)
                .map(|i| (i.clone(), project.zoom))
        })
    });

    // Base (pre-zoom, unrotated) box for drag clamping; the clamp applies
    // zoom and rotation itself
    Effect::new(move |_| {
        if let Some((item, _)) = placed.get() {
            let fp = footprint_px(item.item.width, item.item.depth);
            ctx.record_size(instance_id, Size::new(fp.w, fp.h));
        }
    });
    on_cleanup(move || ctx.forget_size(instance_id));

    let dragging = move || {
        dnd.dragging_read.get()
            == Some(DragSource::Canvas { kind, instance_id })
    };
    let selected = move || {
        ctx.selection.get() == Some(Selection { kind, instance_id })
    };

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        // A drop fires a click too; only a plain click selects
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        ctx.select(Selection { kind, instance_id });
    };

    view! {
        {move || {
            placed
                .get()
                .map(|(item, zoom)| {
                    let fp = footprint_px(item.item.width, item.item.depth);
                    let scale = f64::from(zoom) / 100.0;
                    let (w, h) = (fp.w * scale, fp.h * scale);
                    let color = item
                        .item
                        .color
                        .clone()
                        .unwrap_or_else(|| FALLBACK_COLOR.to_string());
                    let style = format!(
                        "left: {}px; top: {}px; width: {}px; height: {}px; \
                         transform: rotate({}deg); background-color: {};",
                        item.x - w / 2.0,
                        item.y - h / 2.0,
                        w,
                        h,
                        item.rotation,
                        color,
                    );
                    let class = item_class(kind, selected(), dragging());
                    let on_mousedown = make_on_mousedown(
                        dnd,
                        DragSource::Canvas { kind, instance_id },
                        item.x,
                        item.y + TOP_BAR_HEIGHT,
                    );
                    let image = item.item.image.clone();
                    let label = item.item.name.clone();

                    view! {
                        <div
                            class=class
                            style=style
                            on:mousedown=on_mousedown
                            on:click=on_click
                        >
                            {image
                                .map(|src| {
                                    view! { <img class="canvas-item-photo" src=src draggable="false" /> }
                                })}
                            <span class="canvas-item-label">{label}</span>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_reflects_kind_selection_and_drag() {
        assert_eq!(item_class(ItemKind::Pedal, false, false), "canvas-item pedal");
        assert_eq!(item_class(ItemKind::Board, false, false), "canvas-item board");
        assert_eq!(
            item_class(ItemKind::Pedal, true, false),
            "canvas-item pedal selected"
        );
        assert_eq!(
            item_class(ItemKind::Board, true, true),
            "canvas-item board selected dragging"
        );
    }
}
