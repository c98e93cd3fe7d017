use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{components::ConfirmDialog, util::api},
    model::arsenal::{ArsenalItemDto, ArsenalKind},
};

/// Action waiting for confirmation
#[derive(Clone, Debug, PartialEq)]
enum PendingAction {
    SaveRename {
        item_id: i32,
        name: String,
    },
    DiscardRename,
    Delete {
        item_id: i32,
        name: String,
        kind: ArsenalKind,
    },
}

/// Equipment of one category with inline rename and delete
///
/// `on_changed` receives the category to refetch after a mutation.
#[component]
pub fn ArsenalTable(items: Vec<ArsenalItemDto>, on_changed: EventHandler<ArsenalKind>) -> Element {
    let mut editing = use_signal(|| None::<(i32, String)>);
    let mut pending = use_signal(|| None::<PendingAction>);

    let confirm = move |_| {
        let Some(action) = pending() else {
            return;
        };
        pending.set(None);

        spawn(async move {
            match action {
                PendingAction::SaveRename { item_id, name } => {
                    match api::rename_arsenal(item_id, name).await {
                        Ok(item) => {
                            editing.set(None);
                            on_changed.call(item.kind);
                        }
                        Err(err) => tracing::error!("Failed to rename equipment: {}", err),
                    }
                }
                PendingAction::DiscardRename => editing.set(None),
                PendingAction::Delete { item_id, kind, .. } => {
                    match api::delete_arsenal(item_id).await {
                        Ok(()) => on_changed.call(kind),
                        Err(err) => tracing::error!("Failed to delete equipment: {}", err),
                    }
                }
            }
        });
    };

    let (title, message, confirm_label, confirm_class) = match pending() {
        Some(PendingAction::SaveRename { name, .. }) => (
            "Save changes?".to_string(),
            format!("Rename this equipment to \"{}\"?", name),
            "Save".to_string(),
            "btn-primary".to_string(),
        ),
        Some(PendingAction::DiscardRename) => (
            "Discard changes?".to_string(),
            "Your edits to this name will be lost.".to_string(),
            "Discard".to_string(),
            "btn-warning".to_string(),
        ),
        Some(PendingAction::Delete { name, .. }) => (
            "Delete equipment?".to_string(),
            format!("\"{}\" will be removed from the arsenal.", name),
            "Delete".to_string(),
            "btn-error".to_string(),
        ),
        None => (
            String::new(),
            String::new(),
            String::new(),
            "btn-primary".to_string(),
        ),
    };

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Name" }
                        th { "Events" }
                        th { class: "w-32", "" }
                    }
                }
                tbody {
                    if items.is_empty() {
                        tr {
                            td { colspan: 3, class: "text-center opacity-60", "No equipment yet" }
                        }
                    }
                    for item in items.iter().cloned() {
                        ArsenalRow {
                            key: "{item.id}",
                            item,
                            editing,
                            pending,
                        }
                    }
                }
            }
        }
        ConfirmDialog {
            open: pending().is_some(),
            title,
            message,
            confirm_label,
            confirm_class,
            on_confirm: confirm,
            on_cancel: move |_| pending.set(None),
        }
    )
}

#[component]
fn ArsenalRow(
    item: ArsenalItemDto,
    editing: Signal<Option<(i32, String)>>,
    pending: Signal<Option<PendingAction>>,
) -> Element {
    let item_id = item.id;
    let draft = editing()
        .filter(|(id, _)| *id == item_id)
        .map(|(_, name)| name);

    rsx!(
        tr {
            td {
                if let Some(draft) = draft.clone() {
                    input {
                        class: "input input-sm w-full",
                        r#type: "text",
                        value: "{draft}",
                        oninput: move |evt| editing.set(Some((item_id, evt.value()))),
                    }
                } else {
                    "{item.name}"
                }
            }
            td {
                if item.events.is_empty() {
                    span { class: "opacity-60", "Unassigned" }
                } else {
                    ul {
                        for (index, event) in item.events.iter().enumerate() {
                            li { key: "{index}", "{event}" }
                        }
                    }
                }
            }
            td {
                {match draft {
                    Some(draft) => rsx!(EditActions { item: item.clone(), draft, editing, pending }),
                    None => rsx!(RowActions { item: item.clone(), editing, pending }),
                }}
            }
        }
    )
}

#[component]
fn EditActions(
    item: ArsenalItemDto,
    draft: String,
    editing: Signal<Option<(i32, String)>>,
    pending: Signal<Option<PendingAction>>,
) -> Element {
    let item_id = item.id;
    let new_name = draft.trim().to_string();
    let can_save = !new_name.is_empty() && new_name != item.name;
    let is_dirty = draft != item.name;

    rsx!(
        div { class: "flex gap-2",
            button {
                class: "btn btn-sm btn-primary",
                disabled: !can_save,
                onclick: move |_| pending.set(Some(PendingAction::SaveRename {
                    item_id,
                    name: new_name.clone(),
                })),
                "Save"
            }
            button {
                class: "btn btn-sm btn-ghost",
                onclick: move |_| {
                    if is_dirty {
                        pending.set(Some(PendingAction::DiscardRename));
                    } else {
                        editing.set(None);
                    }
                },
                "Cancel"
            }
        }
    )
}

#[component]
fn RowActions(
    item: ArsenalItemDto,
    editing: Signal<Option<(i32, String)>>,
    pending: Signal<Option<PendingAction>>,
) -> Element {
    let item_id = item.id;
    let kind = item.kind;
    let name = item.name.clone();
    let delete_name = item.name.clone();

    rsx!(
        div { class: "flex gap-2",
            button {
                class: "btn btn-sm btn-ghost",
                title: "Rename",
                onclick: move |_| editing.set(Some((item_id, name.clone()))),
                Icon { width: 14, height: 14, icon: FaPen }
            }
            button {
                class: "btn btn-sm btn-ghost text-error",
                title: "Delete",
                onclick: move |_| pending.set(Some(PendingAction::Delete {
                    item_id,
                    name: delete_name.clone(),
                    kind,
                })),
                Icon { width: 14, height: 14, icon: FaTrash }
            }
        }
    )
}
