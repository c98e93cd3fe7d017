use dioxus::prelude::*;

use crate::client::router::Route;

/// Sends visitors straight to today's board
#[component]
pub fn Home() -> Element {
    let nav = navigator();

    use_effect(move || {
        nav.replace(Route::MissionControl {});
    });

    rsx!()
}
