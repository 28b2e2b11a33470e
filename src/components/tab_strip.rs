//! Project Tab Strip
//!
//! Top bar with one tab per saved project plus the scratch board. Tabs
//! activate on click, rename on double-click, reorder by drag and delete
//! behind an inline confirmation. The "+" button appends until the cap.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_slot_mouseenter};

use super::confirm_button::ConfirmButton;
use crate::config::MAX_PROJECTS;
use crate::context::{use_app_context, use_dnd, DragSource};
use crate::session::ActiveTarget;
use crate::store::{use_app_store, with_session, AppStateStoreFields};

#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = use_dnd();

    // (id, name) per saved project, in tab order
    let tabs = Memo::new(move |_| {
        store.session().with(|session| {
            session
                .projects
                .iter()
                .map(|p| (p.id, p.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let active = Memo::new(move |_| store.session().with(|session| session.active));
    let at_cap = Memo::new(move |_| tabs.with(|tabs| tabs.len() >= MAX_PROJECTS));

    // Rename draft: (project id, text typed so far)
    let (editing, set_editing) = signal(None::<(i64, String)>);

    let activate = move |target: ActiveTarget| {
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        with_session(&store, |session| session.active = target);
        ctx.clear_selection();
    };

    let commit_rename = move |id: i64, draft: String| {
        let trimmed = draft.trim().to_string();
        if !trimmed.is_empty() {
            with_session(&store, |session| session.commit_rename(id, &trimmed));
        }
        set_editing.set(None);
    };

    let on_create = move |_| {
        with_session(&store, |session| {
            session.create_project(js_sys::Date::now() as i64);
        });
        ctx.clear_selection();
    };

    let scratch_class = move || {
        if active.get() == ActiveTarget::Scratch {
            "project-tab scratch active"
        } else {
            "project-tab scratch"
        }
    };

    view! {
        <div class="tab-strip">
            <button class=scratch_class on:click=move |_| activate(ActiveTarget::Scratch)>
                {move || store.session().with(|session| session.working.name.clone())}
            </button>

            <For
                each={move || tabs.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(index, (id, _))| (*index, *id)
                children=move |(index, (id, _))| {
                    let is_active = move || active.get() == ActiveTarget::Saved(id);
                    // Renames mutate in place without re-keying the row
                    let tab_name = Memo::new(move |_| {
                        tabs.with(|tabs| {
                            tabs.iter()
                                .find(|(tab_id, _)| *tab_id == id)
                                .map(|(_, name)| name.clone())
                                .unwrap_or_default()
                        })
                    });
                    let tab_class = move || {
                        let hovered = dnd.hover_slot_read.get() == Some(index)
                            && dnd.dragging_read.get().is_some();
                        match (is_active(), hovered) {
                            (true, true) => "project-tab active drop-target",
                            (true, false) => "project-tab active",
                            (false, true) => "project-tab drop-target",
                            (false, false) => "project-tab",
                        }
                    };
                    let on_mousedown =
                        make_on_mousedown(dnd, DragSource::Tab { index }, 0.0, 0.0);
                    let on_mouseenter = make_on_slot_mouseenter(dnd, index);
                    let on_delete = Callback::new(move |()| {
                        with_session(&store, |session| session.delete_project(id));
                        ctx.clear_selection();
                    });
                    let start_edit = move || {
                        set_editing.set(Some((id, tab_name.get_untracked())));
                    };

                    view! {
                        <div
                            class=tab_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:click=move |_| activate(ActiveTarget::Saved(id))
                            on:dblclick=move |_| start_edit()
                        >
                            {move || match editing.get() {
                                Some((editing_id, draft)) if editing_id == id => {
                                    view! {
                                        <input
                                            type="text"
                                            class="tab-rename-input"
                                            prop:value=draft
                                            autofocus
                                            on:input=move |ev| {
                                                set_editing
                                                    .set(Some((id, event_target_value(&ev))));
                                            }
                                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                match ev.key().as_str() {
                                                    "Enter" => {
                                                        if let Some((_, draft)) =
                                                            editing.get_untracked()
                                                        {
                                                            commit_rename(id, draft);
                                                        }
                                                    }
                                                    // Abandon the draft; the old name stands
                                                    "Escape" => set_editing.set(None),
                                                    _ => {}
                                                }
                                            }
                                            on:blur=move |_| {
                                                if let Some((editing_id, draft)) =
                                                    editing.get_untracked()
                                                {
                                                    if editing_id == id {
                                                        commit_rename(id, draft);
                                                    }
                                                }
                                            }
                                        />
                                    }
                                        .into_any()
                                }
                                _ => {
                                    view! {
                                        <span class="tab-name">{move || tab_name.get()}</span>
                                    }
                                        .into_any()
                                }
                            }}
                            <Show when=is_active>
                                <button
                                    class="tab-rename-btn"
                                    on:click=move |ev: web_sys::MouseEvent| {
                                        ev.stop_propagation();
                                        start_edit();
                                    }
                                >
                                    "✎"
                                </button>
                            </Show>
                            <ConfirmButton
                                button_class="tab-delete-btn"
                                label="×".to_string()
                                prompt="?".to_string()
                                on_confirm=on_delete
                            />
                        </div>
                    }
                }
            />

            <Show when=move || !at_cap.get()>
                <button class="tab-add-btn" on:click=on_create>
                    "+"
                </button>
            </Show>
        </div>
    }
}
