pub use sea_orm_migration::prelude::*;

mod m20251101_000001_agents;
mod m20251101_000002_events;
mod m20251101_000003_arsenal;
mod m20251101_000004_event_agents;
mod m20251101_000005_event_arsenal;
mod m20251101_000006_arsenal_events;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_agents::Migration),
            Box::new(m20251101_000002_events::Migration),
            Box::new(m20251101_000003_arsenal::Migration),
            Box::new(m20251101_000004_event_agents::Migration),
            Box::new(m20251101_000005_event_arsenal::Migration),
            Box::new(m20251101_000006_arsenal_events::Migration),
        ]
    }
}
