use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_events::Events;

static IDX_EVENT_ID: &str = "idx-event_agents-event_id";
static IDX_AGENT_ID: &str = "idx-event_agents-agent_id";
static FK_EVENT_ID: &str = "fk-event_agents-event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventAgents::Table)
                    .if_not_exists()
                    .col(pk_auto(EventAgents::Id))
                    .col(integer(EventAgents::EventId))
                    // Weak reference, the target document may be deleted independently
                    .col(integer(EventAgents::AgentId))
                    .col(integer(EventAgents::Position))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_ID)
                    .table(EventAgents::Table)
                    .col(EventAgents::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AGENT_ID)
                    .table(EventAgents::Table)
                    .col(EventAgents::AgentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_ID)
                    .from_tbl(EventAgents::Table)
                    .from_col(EventAgents::EventId)
                    .to_tbl(Events::Table)
                    .to_col(Events::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVENT_ID)
                    .table(EventAgents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AGENT_ID)
                    .table(EventAgents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_ID)
                    .table(EventAgents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventAgents::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EventAgents {
    Table,
    Id,
    EventId,
    AgentId,
    Position,
}
