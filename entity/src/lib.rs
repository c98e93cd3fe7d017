//! SeaORM entities for the mission control store.
//!
//! One entity per document collection (`agents`, `events`, `arsenal`) plus the ordered
//! reference tables that hold each document's reference arrays.

pub mod prelude;

pub mod agent;
pub mod arsenal;
pub mod arsenal_event;
pub mod event;
pub mod event_agent;
pub mod event_arsenal;
