use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{agent::AgentDto, api::ErrorDto},
    server::{
        controller::util::get_viewer::get_viewer_from_session, error::Error,
        model::app::AppState, service::agent::AgentService,
    },
};

pub static AGENT_TAG: &str = "agent";

/// List every agent, used by the event assignment form
#[utoipa::path(
    get,
    path = "/api/agents",
    tag = AGENT_TAG,
    responses(
        (status = 200, description = "Success when listing agents", body = Vec<AgentDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_agents(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_viewer_from_session(&state, &session).await?;

    let agents = AgentService::new(&state.db).get_agents().await?;

    Ok((StatusCode::OK, Json(agents)))
}
