use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBoxArchive, FaLocationDot, FaUsers};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{router::Route, util::api},
    model::event::EventDto,
};

/// Summary of one event on the board
///
/// Admins get an archive button; `on_update` fires after a successful archive so the
/// board can refetch.
#[component]
pub fn EventCard(event: EventDto, is_admin: bool, on_update: EventHandler<()>) -> Element {
    let mut archiving = use_signal(|| false);
    let event_id = event.id;

    let location = if event.location.trim().is_empty() {
        "Unknown Location".to_string()
    } else {
        event.location.clone()
    };
    let agents = if event.agent_names.is_empty() {
        "No agents assigned".to_string()
    } else {
        event.agent_names.join(", ")
    };

    let archive = move |_| {
        archiving.set(true);

        spawn(async move {
            match api::archive_event(event_id).await {
                Ok(()) => on_update.call(()),
                Err(err) => tracing::error!("Failed to archive event {}: {}", event_id, err),
            }

            archiving.set(false);
        });
    };

    rsx!(
        div {
            class: "card shadow-sm w-full max-w-96 bg-base-100",
            div {
                class: "card-body",
                Link {
                    to: Route::EventDetail { id: event_id, edit: false },
                    h2 { class: "card-title link-hover", "{event.event_name}" }
                }
                p { class: "text-sm opacity-70", "{event.event_date}" }
                div { class: "flex items-center gap-2",
                    Icon { width: 14, height: 14, icon: FaLocationDot }
                    p { "{location}" }
                }
                div { class: "flex items-center gap-2",
                    Icon { width: 14, height: 14, icon: FaUsers }
                    p { "{agents}" }
                }
                if is_admin {
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-sm btn-outline flex gap-2",
                            disabled: archiving(),
                            onclick: archive,
                            Icon { width: 14, height: 14, icon: FaBoxArchive }
                            "Archive"
                        }
                    }
                }
            }
        }
    )
}
