use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_events::Events;

static IDX_EVENT_ID: &str = "idx-event_arsenal-event_id";
static IDX_ARSENAL_ID: &str = "idx-event_arsenal-arsenal_id";
static FK_EVENT_ID: &str = "fk-event_arsenal-event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventArsenal::Table)
                    .if_not_exists()
                    .col(pk_auto(EventArsenal::Id))
                    .col(integer(EventArsenal::EventId))
                    // Weak reference, the target document may be deleted independently
                    .col(integer(EventArsenal::ArsenalId))
                    .col(integer(EventArsenal::Position))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_ID)
                    .table(EventArsenal::Table)
                    .col(EventArsenal::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARSENAL_ID)
                    .table(EventArsenal::Table)
                    .col(EventArsenal::ArsenalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_ID)
                    .from_tbl(EventArsenal::Table)
                    .from_col(EventArsenal::EventId)
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
                    .table(EventArsenal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ARSENAL_ID)
                    .table(EventArsenal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_ID)
                    .table(EventArsenal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventArsenal::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EventArsenal {
    Table,
    Id,
    EventId,
    ArsenalId,
    Position,
}
