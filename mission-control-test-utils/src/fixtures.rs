//! Database fixtures for dashboard records and their reference lists.
//!
//! Reference lists are written in the order given, with positions starting at 0.
//! Referenced IDs are not checked, so dangling references can be created on purpose.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::error::TestError;

pub struct Fixtures<'a> {
    pub(crate) db: &'a DatabaseConnection,
}

impl<'a> Fixtures<'a> {
    pub async fn insert_agent(
        &self,
        first_name: &str,
        last_name: &str,
        role: &str,
    ) -> Result<entity::agent::Model, TestError> {
        Ok(entity::prelude::Agent::insert(entity::agent::ActiveModel {
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            role: ActiveValue::Set(role.to_string()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?)
    }

    /// Insert an event with every other scalar field empty
    pub async fn insert_event(
        &self,
        event_name: &str,
        event_date: &str,
        is_archive: bool,
    ) -> Result<entity::event::Model, TestError> {
        Ok(entity::prelude::Event::insert(entity::event::ActiveModel {
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
            is_archive: ActiveValue::Set(is_archive),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?)
    }

    /// Insert equipment with the raw stored type, e.g. `"camera"`
    pub async fn insert_arsenal(
        &self,
        name: &str,
        kind: &str,
    ) -> Result<entity::arsenal::Model, TestError> {
        Ok(entity::prelude::Arsenal::insert(entity::arsenal::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            kind: ActiveValue::Set(kind.to_string()),
            date_added: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?)
    }

    /// Append agent references to an event
    pub async fn assign_agents(&self, event_id: i32, agent_ids: &[i32]) -> Result<(), TestError> {
        let start = entity::prelude::EventAgent::find()
            .filter(entity::event_agent::Column::EventId.eq(event_id))
            .all(self.db)
            .await?
            .len() as i32;

        for (offset, &agent_id) in agent_ids.iter().enumerate() {
            entity::prelude::EventAgent::insert(entity::event_agent::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                agent_id: ActiveValue::Set(agent_id),
                position: ActiveValue::Set(start + offset as i32),
                ..Default::default()
            })
            .exec(self.db)
            .await?;
        }

        Ok(())
    }

    /// Append equipment references to an event
    pub async fn assign_arsenal(&self, event_id: i32, item_ids: &[i32]) -> Result<(), TestError> {
        let start = entity::prelude::EventArsenal::find()
            .filter(entity::event_arsenal::Column::EventId.eq(event_id))
            .all(self.db)
            .await?
            .len() as i32;

        for (offset, &item_id) in item_ids.iter().enumerate() {
            entity::prelude::EventArsenal::insert(entity::event_arsenal::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                arsenal_id: ActiveValue::Set(item_id),
                position: ActiveValue::Set(start + offset as i32),
                ..Default::default()
            })
            .exec(self.db)
            .await?;
        }

        Ok(())
    }

    /// Append event references to an equipment item
    pub async fn link_events(&self, item_id: i32, event_ids: &[i32]) -> Result<(), TestError> {
        let start = entity::prelude::ArsenalEvent::find()
            .filter(entity::arsenal_event::Column::ArsenalId.eq(item_id))
            .all(self.db)
            .await?
            .len() as i32;

        for (offset, &event_id) in event_ids.iter().enumerate() {
            entity::prelude::ArsenalEvent::insert(entity::arsenal_event::ActiveModel {
                arsenal_id: ActiveValue::Set(item_id),
                event_id: ActiveValue::Set(event_id),
                position: ActiveValue::Set(start + offset as i32),
                ..Default::default()
            })
            .exec(self.db)
            .await?;
        }

        Ok(())
    }

    /// Equipment references of an event in stored order
    pub async fn event_arsenal_refs(&self, event_id: i32) -> Result<Vec<i32>, TestError> {
        let refs = entity::prelude::EventArsenal::find()
            .filter(entity::event_arsenal::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_arsenal::Column::Position)
            .all(self.db)
            .await?;

        Ok(refs.into_iter().map(|r| r.arsenal_id).collect())
    }

    /// Every stored event, archived or not
    pub async fn all_events(&self) -> Result<Vec<entity::event::Model>, TestError> {
        Ok(entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?)
    }
}
