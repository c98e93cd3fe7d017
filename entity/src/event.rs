use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_name: String,
    /// Calendar day formatted as `YYYY-MM-DD`
    pub event_date: String,
    pub location: String,
    pub contact_person: String,
    pub contact_number: String,
    pub package: String,
    pub layout: String,
    pub sd_card_count: i32,
    pub battery_count: i32,
    pub notes: String,
    pub hqt: String,
    pub aop: String,
    pub date_added: DateTime,
    pub is_archive: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_agent::Entity")]
    EventAgent,
    #[sea_orm(has_many = "super::event_arsenal::Entity")]
    EventArsenal,
}

impl Related<super::event_agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventAgent.def()
    }
}

impl Related<super::event_arsenal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventArsenal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
