use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::event::UpdateEventDto;

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new event with placeholder fields, no references and not archived
    pub async fn create(
        &self,
        event_name: &str,
        event_date: &str,
    ) -> Result<entity::event::Model, DbErr> {
        let event = entity::event::ActiveModel {
            event_name: ActiveValue::Set(event_name.to_string()),
            event_date: ActiveValue::Set(event_date.to_string()),
            location: ActiveValue::Set(String::new()),
            contact_person: ActiveValue::Set(String::new()),
            contact_number: ActiveValue::Set(String::new()),
            package: ActiveValue::Set(String::new()),
            layout: ActiveValue::Set(String::new()),
            sd_card_count: ActiveValue::Set(0),
            battery_count: ActiveValue::Set(0),
            notes: ActiveValue::Set(String::new()),
            hqt: ActiveValue::Set(String::new()),
            aop: ActiveValue::Set(String::new()),
            date_added: ActiveValue::Set(Utc::now().naive_utc()),
            is_archive: ActiveValue::Set(false),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn get_by_id(&self, event_id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await
    }

    /// Gets the non-archived events dated `event_date`
    ///
    /// When `agent_id` is provided only events listing that agent in their agent
    /// references are returned.
    pub async fn get_board(
        &self,
        event_date: &str,
        agent_id: Option<i32>,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        let mut query = entity::prelude::Event::find()
            .filter(entity::event::Column::IsArchive.eq(false))
            .filter(entity::event::Column::EventDate.eq(event_date));

        if let Some(agent_id) = agent_id {
            query = query.filter(
                entity::event::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::event_agent::Column::EventId)
                        .from(entity::prelude::EventAgent)
                        .and_where(entity::event_agent::Column::AgentId.eq(agent_id))
                        .to_owned(),
                ),
            );
        }

        query
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites the editable scalar fields of an event
    ///
    /// Returns `Ok(None)` if the event does not exist.
    pub async fn update(
        &self,
        event_id: i32,
        fields: &UpdateEventDto,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        let Some(event) = self.get_by_id(event_id).await? else {
            return Ok(None);
        };

        let mut event_am = event.into_active_model();
        event_am.event_name = ActiveValue::Set(fields.event_name.clone());
        event_am.event_date = ActiveValue::Set(fields.event_date.clone());
        event_am.location = ActiveValue::Set(fields.location.clone());
        event_am.contact_person = ActiveValue::Set(fields.contact_person.clone());
        event_am.contact_number = ActiveValue::Set(fields.contact_number.clone());
        event_am.package = ActiveValue::Set(fields.package.clone());
        event_am.layout = ActiveValue::Set(fields.layout.clone());
        event_am.sd_card_count = ActiveValue::Set(fields.sd_card_count);
        event_am.battery_count = ActiveValue::Set(fields.battery_count);
        event_am.notes = ActiveValue::Set(fields.notes.clone());
        event_am.hqt = ActiveValue::Set(fields.hqt.clone());
        event_am.aop = ActiveValue::Set(fields.aop.clone());

        let event = event_am.update(self.db).await?;

        Ok(Some(event))
    }

    /// Sets the archive flag of an event
    ///
    /// Returns `Ok(None)` if the event does not exist.
    pub async fn set_archived(
        &self,
        event_id: i32,
        is_archive: bool,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        let Some(event) = self.get_by_id(event_id).await? else {
            return Ok(None);
        };

        let mut event_am = event.into_active_model();
        event_am.is_archive = ActiveValue::Set(is_archive);

        Ok(Some(event_am.update(self.db).await?))
    }

    /// Gets the agent references of an event in stored order
    pub async fn get_agent_refs(&self, event_id: i32) -> Result<Vec<i32>, DbErr> {
        let refs = entity::prelude::EventAgent::find()
            .filter(entity::event_agent::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_agent::Column::Position)
            .order_by_asc(entity::event_agent::Column::Id)
            .all(self.db)
            .await?;

        Ok(refs.into_iter().map(|r| r.agent_id).collect())
    }

    /// Gets the equipment references of an event in stored order
    pub async fn get_arsenal_refs(&self, event_id: i32) -> Result<Vec<i32>, DbErr> {
        let refs = entity::prelude::EventArsenal::find()
            .filter(entity::event_arsenal::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_arsenal::Column::Position)
            .order_by_asc(entity::event_arsenal::Column::Id)
            .all(self.db)
            .await?;

        Ok(refs.into_iter().map(|r| r.arsenal_id).collect())
    }

    /// Replaces the agent reference list of an event, keeping the provided order
    pub async fn replace_agent_refs(&self, event_id: i32, agent_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::EventAgent::delete_many()
            .filter(entity::event_agent::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        if agent_ids.is_empty() {
            return Ok(());
        }

        let refs = agent_ids
            .iter()
            .enumerate()
            .map(|(position, &agent_id)| entity::event_agent::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                agent_id: ActiveValue::Set(agent_id),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            });

        entity::prelude::EventAgent::insert_many(refs)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the equipment reference list of an event, keeping the provided order
    pub async fn replace_arsenal_refs(
        &self,
        event_id: i32,
        arsenal_ids: &[i32],
    ) -> Result<(), DbErr> {
        entity::prelude::EventArsenal::delete_many()
            .filter(entity::event_arsenal::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        if arsenal_ids.is_empty() {
            return Ok(());
        }

        let refs = arsenal_ids
            .iter()
            .enumerate()
            .map(|(position, &arsenal_id)| entity::event_arsenal::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                arsenal_id: ActiveValue::Set(arsenal_id),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            });

        entity::prelude::EventArsenal::insert_many(refs)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
