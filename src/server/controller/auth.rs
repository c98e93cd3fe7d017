use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{agent::AgentDto, api::ErrorDto},
    server::{
        controller::util::get_viewer::get_viewer_from_session,
        error::Error,
        model::{app::AppState, session::agent::SessionAgentId},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Get the agent currently signed in
#[utoipa::path(
    get,
    path = "/api/auth/viewer",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when retrieving the viewer", body = AgentDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_viewer(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(viewer)))
}

/// Log the viewer out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored fails, only clear when populated
    if SessionAgentId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}
