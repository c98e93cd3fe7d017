use sea_orm_migration::{prelude::*, schema::*};

static IDX_EVENTS_DATE_ARCHIVE: &str = "idx-events-event_date-is_archive";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(string(Events::EventName).default(""))
                    .col(string(Events::EventDate).default(""))
                    .col(string(Events::Location).default(""))
                    .col(string(Events::ContactPerson).default(""))
                    .col(string(Events::ContactNumber).default(""))
                    .col(string(Events::Package).default(""))
                    .col(string(Events::Layout).default(""))
                    .col(integer(Events::SdCardCount).default(0))
                    .col(integer(Events::BatteryCount).default(0))
                    .col(text(Events::Notes).default(""))
                    .col(string(Events::Hqt).default(""))
                    .col(string(Events::Aop).default(""))
                    .col(timestamp(Events::DateAdded))
                    .col(boolean(Events::IsArchive).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENTS_DATE_ARCHIVE)
                    .table(Events::Table)
                    .col(Events::EventDate)
                    .col(Events::IsArchive)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENTS_DATE_ARCHIVE)
                    .table(Events::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    Id,
    EventName,
    EventDate,
    Location,
    ContactPerson,
    ContactNumber,
    Package,
    Layout,
    SdCardCount,
    BatteryCount,
    Notes,
    Hqt,
    Aop,
    DateAdded,
    IsArchive,
}
