use sea_orm::DatabaseConnection;

use crate::{
    model::agent::AgentDto,
    server::{data::agent::AgentRepository, error::Error},
};

pub struct AgentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AgentService<'a> {
    /// Creates a new instance of [`AgentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an agent by ID, returning `Ok(None)` if they do not exist
    pub async fn get_agent(&self, agent_id: i32) -> Result<Option<AgentDto>, Error> {
        let agent_repo = AgentRepository::new(self.db);

        let agent = agent_repo.get_by_id(agent_id).await?;

        Ok(agent.map(agent_dto))
    }

    /// Lists every agent, ordered by last then first name
    pub async fn get_agents(&self) -> Result<Vec<AgentDto>, Error> {
        let agent_repo = AgentRepository::new(self.db);

        let agents = agent_repo.get_all().await?;

        Ok(agents.into_iter().map(agent_dto).collect())
    }
}

fn agent_dto(agent: entity::agent::Model) -> AgentDto {
    AgentDto {
        id: agent.id,
        first_name: agent.first_name,
        last_name: agent.last_name,
        role: agent.role,
    }
}
