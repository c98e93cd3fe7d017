use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPen;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{event::EventForm, Page},
        router::Route,
        util::api,
    },
    model::{arsenal::ArsenalKind, event::EventDto},
};

/// Event detail page, an edit form when `edit` is set
#[component]
pub fn EventDetail(id: i32, edit: bool) -> Element {
    let nav = navigator();

    let mut event = use_resource(use_reactive!(|id| async move { api::get_event(id).await }));
    let agents = use_resource(|| async move { api::get_agents().await });
    let equipment = use_resource(|| async move {
        let mut all = Vec::new();
        for kind in ArsenalKind::ALL {
            all.extend(api::get_arsenal(kind).await?);
        }

        Ok::<_, api::ApiError>(all)
    });

    let title = match &*event.read_unchecked() {
        Some(Ok(event)) if !event.event_name.is_empty() => format!("{} | Mission Control", event.event_name),
        _ => "Event | Mission Control".to_string(),
    };

    let body = match (
        &*event.read_unchecked(),
        &*agents.read_unchecked(),
        &*equipment.read_unchecked(),
    ) {
        (Some(Err(err)), _, _) => rsx!(
            div { class: "alert alert-error", "Failed to load event: {err}" }
        ),
        (Some(Ok(current)), Some(Ok(agents)), Some(Ok(equipment))) if edit => rsx!(
            EventForm {
                event: current.clone(),
                agents: agents.clone(),
                equipment: equipment.clone(),
                on_saved: move |_| {
                    event.restart();
                    nav.replace(Route::EventDetail { id, edit: false });
                },
                on_cancel: move |_| {
                    nav.replace(Route::EventDetail { id, edit: false });
                },
            }
        ),
        (Some(Ok(_)), Some(Err(err)), _) | (Some(Ok(_)), _, Some(Err(err))) if edit => rsx!(
            div { class: "alert alert-error", "Failed to load assignment options: {err}" }
        ),
        (Some(Ok(current)), _, _) if !edit => rsx!(EventSummary { event: current.clone() }),
        _ => rsx!(div { class: "skeleton h-64 w-full max-w-3xl" }),
    };

    rsx!(
        Title { "{title}" }
        Page { class: "flex flex-col items-center gap-4",
            if !edit {
                div { class: "w-full max-w-3xl flex justify-end",
                    Link {
                        to: Route::EventDetail { id, edit: true },
                        class: "btn btn-outline flex gap-2",
                        Icon { width: 14, height: 14, icon: FaPen }
                        "Edit"
                    }
                }
            }
            {body}
        }
    )
}

#[component]
fn EventSummary(event: EventDto) -> Element {
    let name = if event.event_name.trim().is_empty() {
        "Unnamed Event".to_string()
    } else {
        event.event_name.clone()
    };
    let location = if event.location.trim().is_empty() {
        "Unknown Location".to_string()
    } else {
        event.location.clone()
    };

    let details = [
        ("Date", event.event_date.clone()),
        ("Location", location),
        ("Contact person", event.contact_person.clone()),
        ("Contact number", event.contact_number.clone()),
        ("Package", event.package.clone()),
        ("Layout", event.layout.clone()),
        ("HQT", event.hqt.clone()),
        ("AOP", event.aop.clone()),
        ("SD cards", event.sd_card_count.to_string()),
        ("Batteries", event.battery_count.to_string()),
    ];

    rsx!(
        div { class: "card shadow-sm w-full max-w-3xl",
            div { class: "card-body",
                h2 { class: "card-title", "{name}" }
                if event.is_archive {
                    span { class: "badge badge-neutral", "Archived" }
                }
                table { class: "table table-sm",
                    tbody {
                        for (label, value) in details {
                            tr { key: "{label}",
                                th { class: "w-40", "{label}" }
                                td { "{value}" }
                            }
                        }
                    }
                }
                if !event.notes.is_empty() {
                    div {
                        h3 { class: "font-semibold", "Notes" }
                        p { class: "whitespace-pre-line", "{event.notes}" }
                    }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    div {
                        h3 { class: "font-semibold", "Agents" }
                        ul { class: "list-disc pl-6",
                            for (index, name) in event.agent_names.iter().enumerate() {
                                li { key: "{index}", "{name}" }
                            }
                        }
                    }
                    div {
                        h3 { class: "font-semibold", "Equipment" }
                        ul { class: "list-disc pl-6",
                            for (index, name) in event.arsenal_names.iter().enumerate() {
                                li { key: "{index}", "{name}" }
                            }
                        }
                    }
                }
            }
        }
    )
}
