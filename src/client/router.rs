use dioxus::prelude::*;

use crate::client::{
    components::dashboard::DashboardLayout,
    routes::{Arsenal, EventDetail, Home, MissionControl, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[nest("/dashboard")]

        #[layout(DashboardLayout)]

        #[route("/mission-control")]
        MissionControl {},

        #[route("/arsenal")]
        Arsenal {},

        #[route("/events/:id?:edit")]
        EventDetail { id: i32, edit: bool },

        #[end_layout]

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
