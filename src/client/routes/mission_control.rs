use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::client::{
    components::{
        event::{CreateEventDialog, EventCard},
        Page,
    },
    store::viewer::ViewerState,
    util::{api, today},
};

/// Today's non-archived events for the viewer
#[component]
pub fn MissionControl() -> Element {
    let viewer_state = use_context::<Signal<ViewerState>>();
    let mut creating = use_signal(|| false);

    let date = today();
    let board_date = date.clone();
    let mut board = use_resource(move || {
        let date = board_date.clone();
        async move { api::get_board(&date).await }
    });

    let is_admin = viewer_state.read().is_admin();

    rsx!(
        Title { "Mission Control" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                div { class: "flex items-center justify-between",
                    div {
                        h1 { class: "text-2xl", "Today's Events" }
                        p { class: "text-sm opacity-70", "{date}" }
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        onclick: move |_| creating.set(true),
                        Icon { width: 14, height: 14, icon: FaPlus }
                        "Create Event"
                    }
                }
                {match &*board.read_unchecked() {
                    Some(Ok(events)) if events.is_empty() => rsx!(
                        p { class: "text-center opacity-70 py-8", "No events today" }
                    ),
                    Some(Ok(events)) => rsx!(
                        div { class: "flex flex-wrap gap-4",
                            for event in events.iter().cloned() {
                                EventCard {
                                    key: "{event.id}",
                                    event,
                                    is_admin,
                                    on_update: move |_| board.restart(),
                                }
                            }
                        }
                    ),
                    Some(Err(err)) => rsx!(
                        div { class: "alert alert-error", "Failed to load events: {err}" }
                    ),
                    None => rsx!(div { class: "skeleton h-32 w-full" }),
                }}
            }
        }
        CreateEventDialog {
            open: creating,
            default_date: date.clone(),
            on_created: move |_| board.restart(),
        }
    )
}
