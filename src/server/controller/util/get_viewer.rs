use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::agent::AgentDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::agent::SessionAgentId},
        service::agent::AgentService,
    },
};

/// Retrieves the viewer from the session and then from the database
///
/// # Returns
/// - `Ok(AgentDto)`: The agent whose ID is stored in the session, with their role
/// - `Err(Error::AuthError(AuthError::AgentNotInSession))`: No agent ID in session
/// - `Err(Error::AuthError(AuthError::AgentNotInDatabase))`: Agent ID in session no longer exists (session is cleared)
/// - `Err(Error)`: Session or database failures
pub async fn get_viewer_from_session(state: &AppState, session: &Session) -> Result<AgentDto, Error> {
    let Some(agent_id) = SessionAgentId::get(session).await? else {
        return Err(AuthError::AgentNotInSession.into());
    };

    let Some(agent) = AgentService::new(&state.db).get_agent(agent_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for agent ID {} with active session but was not found in database",
            agent_id
        );

        return Err(AuthError::AgentNotInDatabase(agent_id).into());
    };

    Ok(agent)
}
