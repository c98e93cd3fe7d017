use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, CreatedEventDto, EventDto, UpdateEventDto},
    },
    server::{
        controller::util::get_viewer::get_viewer_from_session,
        error::Error,
        model::app::AppState,
        service::{chat::ChatService, event::EventService},
        util::time::today_local,
    },
};

pub static EVENT_TAG: &str = "event";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BoardQuery {
    /// Viewer's local calendar day as `YYYY-MM-DD`, defaults to the server's local date
    pub date: Option<String>,
}

/// Get today's event board for the viewer
#[utoipa::path(
    get,
    path = "/api/events/today",
    tag = EVENT_TAG,
    params(BoardQuery),
    responses(
        (status = 200, description = "Success when retrieving the board", body = Vec<EventDto>),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<BoardQuery>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;

    let date = query.date.unwrap_or_else(today_local);

    let board = EventService::new(&state.db)
        .fetch_board(&viewer, &date)
        .await?;

    Ok((StatusCode::OK, Json(board)))
}

/// Create an event and its chat room
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = CreatedEventDto),
        (status = 400, description = "Missing name or date", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, Error> {
    get_viewer_from_session(&state, &session).await?;

    let chats = ChatService::new(&state.realtime);
    let created = EventService::new(&state.db)
        .create(&chats, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a single event
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Success when retrieving the event", body = EventDto),
        (status = 404, description = "User or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_viewer_from_session(&state, &session).await?;

    let event = EventService::new(&state.db).get(event_id).await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Update an event's fields, agents and equipment
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 404, description = "User or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, Error> {
    get_viewer_from_session(&state, &session).await?;

    let event = EventService::new(&state.db)
        .update(event_id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Archive an event, admin only
#[utoipa::path(
    post,
    path = "/api/events/{id}/archive",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event archived"),
        (status = 403, description = "Viewer is not an admin", body = ErrorDto),
        (status = 404, description = "User or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn archive_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;

    EventService::new(&state.db)
        .archive(&viewer, event_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
