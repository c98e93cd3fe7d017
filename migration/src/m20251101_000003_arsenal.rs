use sea_orm_migration::{prelude::*, schema::*};

static IDX_ARSENAL_TYPE: &str = "idx-arsenal-type";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Arsenal::Table)
                    .if_not_exists()
                    .col(pk_auto(Arsenal::Id))
                    .col(string(Arsenal::Name))
                    .col(string(Arsenal::Type))
                    .col(timestamp(Arsenal::DateAdded))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARSENAL_TYPE)
                    .table(Arsenal::Table)
                    .col(Arsenal::Type)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ARSENAL_TYPE)
                    .table(Arsenal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Arsenal::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Arsenal {
    Table,
    Id,
    Name,
    Type,
    DateAdded,
}
