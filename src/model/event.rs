use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Event with its agent and equipment references resolved to display labels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EventDto {
    pub id: i32,
    pub event_name: String,
    pub event_date: String,
    pub location: String,
    pub contact_person: String,
    pub contact_number: String,
    pub package: String,
    pub layout: String,
    pub sd_card_count: i32,
    pub battery_count: i32,
    pub notes: String,
    pub hqt: String,
    pub aop: String,
    /// Referenced agent IDs in stored order
    pub agents: Vec<i32>,
    /// Referenced equipment IDs in stored order
    pub arsenal: Vec<i32>,
    pub agent_names: Vec<String>,
    pub arsenal_names: Vec<String>,
    pub date_added: NaiveDateTime,
    pub is_archive: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateEventDto {
    pub name: String,
    /// Calendar day formatted as `YYYY-MM-DD`
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreatedEventDto {
    pub id: i32,
    /// Detail page to open in edit mode
    pub redirect: String,
}

/// Full replacement of an event's editable fields and reference lists
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateEventDto {
    pub event_name: String,
    pub event_date: String,
    pub location: String,
    pub contact_person: String,
    pub contact_number: String,
    pub package: String,
    pub layout: String,
    pub sd_card_count: i32,
    pub battery_count: i32,
    pub notes: String,
    pub hqt: String,
    pub aop: String,
    pub agents: Vec<i32>,
    pub arsenal: Vec<i32>,
}

impl From<&EventDto> for UpdateEventDto {
    fn from(event: &EventDto) -> Self {
        Self {
            event_name: event.event_name.clone(),
            event_date: event.event_date.clone(),
            location: event.location.clone(),
            contact_person: event.contact_person.clone(),
            contact_number: event.contact_number.clone(),
            package: event.package.clone(),
            layout: event.layout.clone(),
            sd_card_count: event.sd_card_count,
            battery_count: event.battery_count,
            notes: event.notes.clone(),
            hqt: event.hqt.clone(),
            aop: event.aop.clone(),
            agents: event.agents.clone(),
            arsenal: event.arsenal.clone(),
        }
    }
}

/// Path of the event detail page
pub fn event_detail_path(event_id: i32, edit: bool) -> String {
    if edit {
        format!("/dashboard/events/{}?edit=true", event_id)
    } else {
        format!("/dashboard/events/{}", event_id)
    }
}
