use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{
            arsenal::{AddArsenalDialog, ArsenalTable},
            Page,
        },
        util::api,
    },
    model::arsenal::ArsenalKind,
};

#[component]
pub fn Arsenal() -> Element {
    let mut selected = use_signal(|| ArsenalKind::Camera);
    let mut adding = use_signal(|| false);

    let mut items = use_resource(move || async move { api::get_arsenal(selected()).await });

    // Refetch the category a mutation touched, switching to it when another tab is open
    let mut refresh = move |kind: ArsenalKind| {
        if selected() == kind {
            items.restart();
        } else {
            selected.set(kind);
        }
    };

    rsx!(
        Title { "Arsenal | Mission Control" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                div { class: "flex items-center justify-between",
                    div { role: "tablist", class: "tabs tabs-box",
                        for kind in ArsenalKind::ALL {
                            a {
                                role: "tab",
                                class: if selected() == kind { "tab tab-active" } else { "tab" },
                                onclick: move |_| selected.set(kind),
                                "{kind.label()}"
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        onclick: move |_| adding.set(true),
                        Icon { width: 14, height: 14, icon: FaPlus }
                        "Add Arsenal"
                    }
                }
                {match &*items.read_unchecked() {
                    Some(Ok(list)) => rsx!(ArsenalTable {
                        items: list.clone(),
                        on_changed: move |kind| refresh(kind),
                    }),
                    Some(Err(err)) => rsx!(
                        div { class: "alert alert-error", "Failed to load equipment: {err}" }
                    ),
                    None => rsx!(div { class: "skeleton h-32 w-full" }),
                }}
            }
        }
        AddArsenalDialog {
            open: adding,
            default_kind: selected(),
            on_created: move |kind| refresh(kind),
        }
    )
}
