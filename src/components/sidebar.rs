//! Sidebar Component
//!
//! Fixed right-hand column: catalog search, the custom-item form, display
//! settings and the clear-board action. Selecting a placed item swaps the
//! whole column for its details panel.

use leptos::prelude::*;

use super::confirm_button::ConfirmButton;
use super::custom_item_form::CustomItemForm;
use super::details_panel::DetailsPanel;
use super::search_dropdown::SearchDropdown;
use crate::context::use_app_context;
use crate::i18n::translate;
use crate::models::{ItemKind, Language, Units};
use crate::store::{use_app_store, with_session, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let t = move |key: &str| translate(store.language().get(), key).to_string();

    let pedals = Signal::derive(move || store.library().with(|lib| lib.pedals.clone()));
    let boards = Signal::derive(move || store.library().with(|lib| lib.boards.clone()));

    let on_clear = Callback::new(move |()| {
        with_session(&store, |session| session.clear_active());
        ctx.clear_selection();
    });

    let on_language = move |ev: web_sys::Event| {
        let lang = match event_target_value(&ev).as_str() {
            "fr" => Language::Fr,
            "es" => Language::Es,
            "de" => Language::De,
            "it" => Language::It,
            _ => Language::En,
        };
        store.language().set(lang);
    };
    let on_units = move |ev: web_sys::Event| {
        let units = match event_target_value(&ev).as_str() {
            "imperial" => Units::Imperial,
            _ => Units::Metric,
        };
        store.units().set(units);
    };

    let library = move || {
        view! {
            <div class="sidebar-library">
                <div class="sidebar-logo">"MAKE YOUR BOARD"</div>
                {move || {
                    store
                        .library_error()
                        .get()
                        .map(|err| view! { <div class="library-error">{err}</div> })
                }}
                <Show
                    when=move || store.library_loaded().get()
                    fallback=move || {
                        view! { <div class="library-loading">{t("sidebar.loading")}</div> }
                    }
                >
                    <section class="sidebar-section">
                        <h3>{move || t("sidebar.addPedal")}</h3>
                        <SearchDropdown
                            kind=ItemKind::Pedal
                            items=pedals
                            placeholder_key="sidebar.searchPedal"
                        />
                    </section>
                    <section class="sidebar-section">
                        <h3>{move || t("sidebar.addBoard")}</h3>
                        <SearchDropdown
                            kind=ItemKind::Board
                            items=boards
                            placeholder_key="sidebar.searchBoard"
                        />
                    </section>
                </Show>

                <section class="sidebar-section">
                    <CustomItemForm />
                </section>

                <section class="sidebar-section settings">
                    <h3>{move || t("settings.title")}</h3>
                    <label class="settings-row">
                        <span>{move || t("settings.language")}</span>
                        <select
                            prop:value=move || store.language().get().as_str()
                            on:change=on_language
                        >
                            {Language::ALL
                                .iter()
                                .map(|lang| {
                                    let code = lang.as_str();
                                    view! {
                                        <option value=code>
                                            {move || {
                                                t(&format!("language.{code}"))
                                            }}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="settings-row">
                        <span>{move || t("settings.units")}</span>
                        <select
                            prop:value=move || match store.units().get() {
                                Units::Metric => "metric",
                                Units::Imperial => "imperial",
                            }
                            on:change=on_units
                        >
                            <option value="metric">"mm / g"</option>
                            <option value="imperial">"in / oz"</option>
                        </select>
                    </label>
                </section>

                <section class="sidebar-section">
                    <ConfirmButton
                        button_class="clear-board-btn"
                        label=Signal::derive(move || t("sidebar.clearBoard"))
                        prompt=Signal::derive(move || t("sidebar.clearConfirm"))
                        on_confirm=on_clear
                    />
                </section>
            </div>
        }
    };

    view! {
        <aside class="sidebar">
            {move || match ctx.selection.get() {
                Some(selection) => view! { <DetailsPanel selection=selection /> }.into_any(),
                None => library().into_any(),
            }}
        </aside>
    }
}
