//! Catalog Search Dropdown
//!
//! Search box over one catalog collection. Matches are grouped by brand;
//! clicking a row places the item at the center of the visible stage.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::geometry::stage_center;
use crate::i18n::translate;
use crate::models::{CatalogItem, ItemKind};
use crate::search::group_by_brand;
use crate::store::{use_app_store, with_session, AppStateStoreFields};

#[component]
pub fn SearchDropdown(
    kind: ItemKind,
    items: Signal<Vec<CatalogItem>>,
    #[prop(into)] placeholder_key: String,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (query, set_query) = signal(String::new());
    let (open, set_open) = signal(false);

    let groups = Memo::new(move |_| {
        items.with(|items| {
            group_by_brand(items, &query.get())
                .into_iter()
                .map(|(brand, members)| {
                    (brand, members.into_iter().cloned().collect::<Vec<_>>())
                })
                .collect::<Vec<_>>()
        })
    });

    let empty_key = match kind {
        ItemKind::Pedal => "search.noPedals",
        ItemKind::Board => "search.noBoards",
    };

    let on_pick = move |item: CatalogItem| {
        let center = stage_center(ctx.viewport.get_untracked());
        let now_ms = js_sys::Date::now() as i64;
        with_session(&store, |session| {
            session.add_item(kind, item, center, now_ms);
        });
        set_query.set(String::new());
        set_open.set(false);
    };

    view! {
        <div class="search-dropdown">
            <input
                type="text"
                class="search-input"
                placeholder=move || {
                    translate(store.language().get(), &placeholder_key).to_string()
                }
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    set_open.set(true);
                }
                on:focus=move |_| set_open.set(true)
                // Delay lets a click on a result land before the list closes
                on:blur=move |_| {
                    spawn_local(async move {
                        TimeoutFuture::new(150).await;
                        set_open.set(false);
                    });
                }
            />
            <Show when=move || open.get()>
                <div class="search-results">
                    {move || {
                        let groups = groups.get();
                        if groups.is_empty() {
                            view! {
                                <div class="search-empty">
                                    {translate(store.language().get(), empty_key).to_string()}
                                </div>
                            }
                                .into_any()
                        } else {
                            groups
                                .into_iter()
                                .map(|(brand, members)| {
                                    view! {
                                        <div class="search-group">
                                            <div class="search-group-brand">{brand}</div>
                                            {members
                                                .into_iter()
                                                .map(|item| {
                                                    let label = item.name.clone();
                                                    view! {
                                                        <button
                                                            class="search-result"
                                                            on:click=move |_| on_pick(item.clone())
                                                        >
                                                            {label}
                                                        </button>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
