use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_arsenal::Arsenal;

static IDX_ARSENAL_ID: &str = "idx-arsenal_events-arsenal_id";
static IDX_EVENT_ID: &str = "idx-arsenal_events-event_id";
static FK_ARSENAL_ID: &str = "fk-arsenal_events-arsenal_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArsenalEvents::Table)
                    .if_not_exists()
                    .col(pk_auto(ArsenalEvents::Id))
                    .col(integer(ArsenalEvents::ArsenalId))
                    // Weak reference, the target document may be deleted independently
                    .col(integer(ArsenalEvents::EventId))
                    .col(integer(ArsenalEvents::Position))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARSENAL_ID)
                    .table(ArsenalEvents::Table)
                    .col(ArsenalEvents::ArsenalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_ID)
                    .table(ArsenalEvents::Table)
                    .col(ArsenalEvents::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARSENAL_ID)
                    .from_tbl(ArsenalEvents::Table)
                    .from_col(ArsenalEvents::ArsenalId)
                    .to_tbl(Arsenal::Table)
                    .to_col(Arsenal::Id)
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
                    .name(FK_ARSENAL_ID)
                    .table(ArsenalEvents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_ID)
                    .table(ArsenalEvents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ARSENAL_ID)
                    .table(ArsenalEvents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ArsenalEvents::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ArsenalEvents {
    Table,
    Id,
    ArsenalId,
    EventId,
    Position,
}
