use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Not Found | Mission Control" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "Page not found" }
            p { class: "opacity-70", "Nothing lives at {path}" }
            Link { to: Route::MissionControl {}, class: "btn btn-primary", "Back to Mission Control" }
        }
    )
}
