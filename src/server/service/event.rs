use std::collections::HashSet;

use dioxus_logger::tracing;
use futures::future::try_join_all;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        agent::AgentDto,
        event::{event_detail_path, CreateEventDto, CreatedEventDto, EventDto, UpdateEventDto},
    },
    server::{
        data::{arsenal::ArsenalRepository, event::EventRepository},
        error::{auth::AuthError, event::EventError, Error},
        service::{chat::ChatService, resolver::ReferenceResolver},
        util::time::validate_event_date,
    },
};

/// Board label for events stored without a name
pub const UNNAMED_EVENT: &str = "Unnamed Event";

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the board of non-archived events dated `date` for the viewer
    ///
    /// Admins see every event of the day, other agents only the events listing them.
    /// Agent and equipment references are resolved to display names.
    pub async fn fetch_board(&self, viewer: &AgentDto, date: &str) -> Result<Vec<EventDto>, Error> {
        validate_event_date(date)?;

        let event_repo = EventRepository::new(self.db);

        let agent_filter = if viewer.is_admin() {
            None
        } else {
            Some(viewer.id)
        };

        let events = event_repo.get_board(date, agent_filter).await?;

        let mut board = try_join_all(events.into_iter().map(|event| self.to_dto(event))).await?;
        for event in board.iter_mut() {
            if event.event_name.trim().is_empty() {
                event.event_name = UNNAMED_EVENT.to_string();
            }
        }

        Ok(board)
    }

    /// Gets a single event with resolved labels
    pub async fn get(&self, event_id: i32) -> Result<EventDto, Error> {
        let event_repo = EventRepository::new(self.db);

        let Some(event) = event_repo.get_by_id(event_id).await? else {
            return Err(EventError::NotFound(event_id).into());
        };

        self.to_dto(event).await
    }

    /// Creates an event from the board's create form and provisions its chat root
    ///
    /// The event row and the chat root are written one after the other; if provisioning
    /// fails the event is kept and the error is returned.
    pub async fn create(
        &self,
        chats: &ChatService<'_>,
        form: &CreateEventDto,
    ) -> Result<CreatedEventDto, Error> {
        let name = form.name.trim();
        let date = form.date.trim();

        if name.is_empty() || date.is_empty() {
            return Err(EventError::MissingNameOrDate.into());
        }
        validate_event_date(date)?;

        let event_repo = EventRepository::new(self.db);
        let event = event_repo.create(name, date).await?;

        if let Err(e) = chats.provision(event.id, &event.event_name).await {
            tracing::error!(
                event_id = event.id,
                "Created event but failed to provision its chat root: {}",
                e
            );

            return Err(e);
        }

        tracing::info!(event_id = event.id, date = %date, "Created event {:?}", event.event_name);

        Ok(CreatedEventDto {
            id: event.id,
            redirect: event_detail_path(event.id, true),
        })
    }

    /// Overwrites an event's fields and reference lists
    ///
    /// Newly assigned equipment gets the event appended to its event list, unassigned
    /// equipment has it removed.
    pub async fn update(&self, event_id: i32, fields: &UpdateEventDto) -> Result<EventDto, Error> {
        if !fields.event_date.is_empty() {
            validate_event_date(&fields.event_date)?;
        }

        let txn = self.db.begin().await?;

        let event_repo = EventRepository::new(&txn);
        let arsenal_repo = ArsenalRepository::new(&txn);

        let Some(event) = event_repo.update(event_id, fields).await? else {
            return Err(EventError::NotFound(event_id).into());
        };

        let previous: HashSet<i32> = event_repo
            .get_arsenal_refs(event_id)
            .await?
            .into_iter()
            .collect();
        let assigned: HashSet<i32> = fields.arsenal.iter().copied().collect();

        event_repo.replace_agent_refs(event_id, &fields.agents).await?;
        event_repo
            .replace_arsenal_refs(event_id, &fields.arsenal)
            .await?;

        for &item_id in previous.difference(&assigned) {
            arsenal_repo.remove_event_ref(item_id, event_id).await?;
        }
        // Dangling equipment ids stay in the event's list but get no back reference
        for &item_id in assigned.difference(&previous) {
            if arsenal_repo.get_by_id(item_id).await?.is_none() {
                continue;
            }
            if !arsenal_repo
                .get_event_refs(item_id)
                .await?
                .contains(&event_id)
            {
                arsenal_repo.add_event_ref(item_id, event_id).await?;
            }
        }

        txn.commit().await?;

        tracing::debug!(event_id = event_id, "Updated event");

        self.to_dto(event).await
    }

    /// Archives an event, removing it from every board
    pub async fn archive(&self, viewer: &AgentDto, event_id: i32) -> Result<(), Error> {
        if !viewer.is_admin() {
            return Err(AuthError::Forbidden {
                agent_id: viewer.id,
                role: viewer.role.clone(),
                action: format!("archive event ID {}", event_id),
            }
            .into());
        }

        let event_repo = EventRepository::new(self.db);
        if event_repo.set_archived(event_id, true).await?.is_none() {
            return Err(EventError::NotFound(event_id).into());
        }

        tracing::info!(event_id = event_id, agent_id = viewer.id, "Archived event");

        Ok(())
    }

    async fn to_dto(&self, event: entity::event::Model) -> Result<EventDto, Error> {
        let event_repo = EventRepository::new(self.db);
        let resolver = ReferenceResolver::new(self.db);

        let agents = event_repo.get_agent_refs(event.id).await?;
        let arsenal = event_repo.get_arsenal_refs(event.id).await?;

        let (agent_names, arsenal_names) = futures::join!(
            resolver.agent_names(&agents),
            resolver.arsenal_names(&arsenal)
        );

        Ok(EventDto {
            id: event.id,
            event_name: event.event_name,
            event_date: event.event_date,
            location: event.location,
            contact_person: event.contact_person,
            contact_number: event.contact_number,
            package: event.package,
            layout: event.layout,
            sd_card_count: event.sd_card_count,
            battery_count: event.battery_count,
            notes: event.notes,
            hqt: event.hqt,
            aop: event.aop,
            agents,
            arsenal,
            agent_names,
            arsenal_names,
            date_added: event.date_added,
            is_archive: event.is_archive,
        })
    }
}
