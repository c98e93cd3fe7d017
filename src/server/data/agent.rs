use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct AgentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AgentRepository<'a, C> {
    /// Creates a new instance of [`AgentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new agent
    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        role: &str,
    ) -> Result<entity::agent::Model, DbErr> {
        let agent = entity::agent::ActiveModel {
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            role: ActiveValue::Set(role.to_string()),
            ..Default::default()
        };

        agent.insert(self.db).await
    }

    pub async fn get_by_id(&self, agent_id: i32) -> Result<Option<entity::agent::Model>, DbErr> {
        entity::prelude::Agent::find_by_id(agent_id)
            .one(self.db)
            .await
    }

    /// Gets every agent ordered by last then first name
    pub async fn get_all(&self) -> Result<Vec<entity::agent::Model>, DbErr> {
        entity::prelude::Agent::find()
            .order_by_asc(entity::agent::Column::LastName)
            .order_by_asc(entity::agent::Column::FirstName)
            .all(self.db)
            .await
    }
}
