use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBoxOpen, FaCalendarDay, FaRightFromBracket};
use dioxus_free_icons::Icon;

use crate::client::{router::Route, store::viewer::ViewerState};

#[component]
pub fn DashboardNavbar() -> Element {
    let viewer_state = use_context::<Signal<ViewerState>>();

    let viewer_name = viewer_state
        .read()
        .viewer
        .as_ref()
        .map(|viewer| viewer.display_name());

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start gap-2",
                p { class: "text-xl px-2", "Mission Control" }
                Link {
                    to: Route::MissionControl {},
                    class: "btn btn-ghost flex gap-2",
                    Icon { width: 16, height: 16, icon: FaCalendarDay }
                    "Today"
                }
                Link {
                    to: Route::Arsenal {},
                    class: "btn btn-ghost flex gap-2",
                    Icon { width: 16, height: 16, icon: FaBoxOpen }
                    "Arsenal"
                }
            }
            div {
                class: "navbar-end gap-2",
                if let Some(name) = viewer_name {
                    p { class: "text-sm", "{name}" }
                }
                a { href: "/api/auth/logout",
                    button {
                        class: "btn btn-outline flex gap-2",
                        Icon { width: 16, height: 16, icon: FaRightFromBracket }
                        "Logout"
                    }
                }
            }
        }
    }
}
