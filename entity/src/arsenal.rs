use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "arsenal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// One of `camera`, `laptop` or `printer`, fixed at creation
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub date_added: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::arsenal_event::Entity")]
    ArsenalEvent,
}

impl Related<super::arsenal_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArsenalEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
