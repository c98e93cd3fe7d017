use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::dashboard::DashboardNavbar, router::Route, store::viewer::ViewerState,
    util::api,
};

/// Dashboard shell: fetches the viewer once and shares it with the pages below
#[component]
pub fn DashboardLayout() -> Element {
    let mut viewer_state = use_context_provider(|| Signal::new(ViewerState::default()));

    let _ = use_resource(move || async move {
        match api::get_viewer().await {
            Ok(viewer) => viewer_state.set(ViewerState {
                viewer,
                fetched: true,
            }),
            Err(err) => {
                tracing::error!("Failed to fetch viewer: {}", err);

                viewer_state.set(ViewerState {
                    viewer: None,
                    fetched: true,
                });
            }
        }
    });

    let state = viewer_state.read();

    rsx!(
        DashboardNavbar {}
        if state.fetched && state.viewer.is_none() {
            div { class: "min-h-screen pt-[64px] p-4 flex items-center justify-center",
                div { class: "alert max-w-md",
                    span { "You are not signed in. Sign in through the staff portal to use the dashboard." }
                }
            }
        } else {
            Outlet::<Route> {}
        }
    )
}
