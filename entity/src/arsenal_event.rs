use sea_orm::entity::prelude::*;

/// Ordered entry of the `arsenal`'s reference array.
///
/// `event_id` is a weak reference: it carries no foreign key, so the referenced document
/// may have been deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "arsenal_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub arsenal_id: i32,
    pub event_id: i32,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::arsenal::Entity",
        from = "Column::ArsenalId",
        to = "super::arsenal::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Arsenal,
}

impl Related<super::arsenal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Arsenal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
