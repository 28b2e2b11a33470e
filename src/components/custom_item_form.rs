//! Custom Item Form
//!
//! "Make your own" form: a named rectangle with physical dimensions and a
//! color, placed like any catalog item. Submission without numeric
//! dimensions is ignored and keeps the draft intact.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::geometry::stage_center;
use crate::i18n::translate;
use crate::models::{CustomDraft, ItemKind};
use crate::store::{use_app_store, with_session, AppStateStoreFields};

const DEFAULT_COLOR: &str = "#3b82f6";

#[component]
pub fn CustomItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (kind, set_kind) = signal(ItemKind::Pedal);
    let (name, set_name) = signal(String::new());
    let (width, set_width) = signal(String::new());
    let (depth, set_depth) = signal(String::new());
    let (color, set_color) = signal(DEFAULT_COLOR.to_string());

    let t = move |key: &str| translate(store.language().get(), key).to_string();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = CustomDraft {
            kind: kind.get(),
            name: name.get(),
            width: width.get(),
            depth: depth.get(),
            color: color.get(),
        };
        let center = stage_center(ctx.viewport.get_untracked());
        let now_ms = js_sys::Date::now() as i64;
        let mut added = None;
        with_session(&store, |session| {
            added = session.add_custom(&draft, center, now_ms);
        });
        // Keep the draft on a rejected submit so nothing typed is lost
        if added.is_some() {
            set_name.set(String::new());
            set_width.set(String::new());
            set_depth.set(String::new());
        }
    };

    let kind_class = move |k: ItemKind| {
        if kind.get() == k {
            "kind-toggle active"
        } else {
            "kind-toggle"
        }
    };

    view! {
        <form class="custom-item-form" on:submit=on_submit>
            <h3>{move || t("custom.title")}</h3>
            <div class="kind-toggle-row">
                <button
                    type="button"
                    class=move || kind_class(ItemKind::Pedal)
                    on:click=move |_| set_kind.set(ItemKind::Pedal)
                >
                    {move || t("custom.pedal")}
                </button>
                <button
                    type="button"
                    class=move || kind_class(ItemKind::Board)
                    on:click=move |_| set_kind.set(ItemKind::Board)
                >
                    {move || t("custom.board")}
                </button>
            </div>
            <input
                type="text"
                placeholder=move || t("custom.name")
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <div class="dimension-row">
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder=move || format!("{} (mm)", t("custom.width"))
                    prop:value=move || width.get()
                    on:input=move |ev| set_width.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder=move || format!("{} (mm)", t("custom.depth"))
                    prop:value=move || depth.get()
                    on:input=move |ev| set_depth.set(event_target_value(&ev))
                />
            </div>
            <input
                type="color"
                prop:value=move || color.get()
                on:input=move |ev| set_color.set(event_target_value(&ev))
            />
            <button type="submit">{move || t("custom.add")}</button>
        </form>
    }
}
