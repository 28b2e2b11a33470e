//! Item Details Panel
//!
//! Sidebar view for one selected placement: spec sheet, rotate/delete
//! actions and jurisdiction-aware buy-online links.

use leptos::prelude::*;

use crate::context::{use_app_context, Selection};
use crate::i18n::translate;
use crate::models::{BoardItem, ItemKind};
use crate::shops::shop_links;
use crate::store::{use_app_store, with_session, AppStateStoreFields};
use crate::units::{format_dimensions, format_weight};

fn spec_row(label: String, value: Option<String>) -> impl IntoView {
    value.map(|value| {
        view! {
            <div class="spec-row">
                <span class="spec-label">{label}</span>
                <span class="spec-value">{value}</span>
            </div>
        }
    })
}

#[component]
pub fn DetailsPanel(selection: Selection) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let t = move |key: &str| translate(store.language().get(), key).to_string();

    let placed = Memo::new(move |_| {
        store.session().with(|session| {
            let project = session.active_project();
            let items = match selection.kind {
                ItemKind::Pedal => &project.board_pedals,
                ItemKind::Board => &project.selected_boards,
            };
            items
                .iter()
                .find(|i| i.instance_id == selection.instance_id)
                .cloned()
        })
    });

    // The placement can disappear under the panel (project switch, clear)
    Effect::new(move |_| {
        if placed.get().is_none() {
            ctx.clear_selection();
        }
    });

    let on_rotate = move |_| {
        with_session(&store, |session| {
            session.rotate_item(selection.kind, selection.instance_id);
        });
    };
    let on_delete = move |_| {
        with_session(&store, |session| {
            session.remove_item(selection.kind, selection.instance_id);
        });
        ctx.clear_selection();
    };

    let body = move |item: BoardItem| {
        let units = store.units().get();
        let country = store.country().get();
        let prefix = match selection.kind {
            ItemKind::Pedal => "pedal",
            ItemKind::Board => "board",
        };
        let spec = &item.item;

        let mut rows: Vec<(String, Option<String>)> = vec![
            (t(&format!("{prefix}.status")), spec.status.clone()),
            (t(&format!("{prefix}.origin")), spec.origin.clone()),
        ];
        match selection.kind {
            ItemKind::Pedal => {
                rows.push((t("pedal.type"), spec.kind.clone()));
                rows.push((t("pedal.circuit"), spec.circuit.clone()));
                rows.push((t("pedal.bypass"), spec.bypass.clone()));
                rows.push((t("pedal.power"), spec.power.clone()));
                if spec.draw > 0.0 {
                    rows.push((t("pedal.draw"), Some(format!("{:.0} mA", spec.draw))));
                }
            }
            ItemKind::Board => {
                rows.push((t("board.material"), spec.material.clone()));
                rows.push((t("board.profile"), spec.profile.clone()));
            }
        }
        rows.push((
            t(&format!("{prefix}.dimensions")),
            Some(format_dimensions(spec.width, spec.depth, units)),
        ));
        if spec.weight > 0.0 {
            rows.push((
                t(&format!("{prefix}.weight")),
                Some(format_weight(spec.weight, units)),
            ));
        }

        let manual = spec.manual.clone();
        let links = shop_links(spec, &country);

        view! {
            <div class="details-body">
                <h2>{format!("{} {}", spec.brand, spec.name)}</h2>
                {spec
                    .year
                    .map(|year| view! { <div class="details-year">{year.to_string()}</div> })}
                <div class="spec-sheet">
                    {rows.into_iter().map(|(label, value)| spec_row(label, value)).collect_view()}
                </div>
                {manual
                    .map(|url| {
                        view! {
                            <a class="manual-link" href=url target="_blank" rel="noopener">
                                {t("pedal.manual")}
                            </a>
                        }
                    })}
                <div class="details-actions">
                    <button class="rotate-btn" on:click=on_rotate>
                        {t("sidebar.rotate")}
                    </button>
                    <button class="delete-btn" on:click=on_delete>
                        {t("sidebar.delete")}
                    </button>
                </div>
                <Show when={
                    let has_links = !links.is_empty();
                    move || has_links
                }>
                    <h3>{t("sidebar.buyOnline")}</h3>
                </Show>
                <div class="shop-links">
                    {links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="shop-link"
                                    href=link.url.clone()
                                    target="_blank"
                                    rel="noopener"
                                >
                                    {link.shop.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    };

    view! {
        <div class="details-panel">
            <button class="back-btn" on:click=move |_| ctx.clear_selection()>
                {move || format!("← {}", t("sidebar.back"))}
            </button>
            {move || placed.get().map(body)}
        </div>
    }
}
