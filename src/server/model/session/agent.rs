use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_AGENT_ID_KEY: &str = "mission_control:agent:id";

/// ID of the agent viewing the dashboard
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAgentId(pub String);

impl SessionAgentId {
    /// Insert agent ID into session
    pub async fn insert(session: &Session, agent_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_AGENT_ID_KEY, SessionAgentId(agent_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get agent ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionAgentId>(SESSION_AGENT_ID_KEY)
            .await?
            .map(|SessionAgentId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session agent id: {}", e))
                })
            })
            .transpose()
    }
}
