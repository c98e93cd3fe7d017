pub use super::agent::Entity as Agent;
pub use super::arsenal::Entity as Arsenal;
pub use super::arsenal_event::Entity as ArsenalEvent;
pub use super::event::Entity as Event;
pub use super::event_agent::Entity as EventAgent;
pub use super::event_arsenal::Entity as EventArsenal;
