//! Service layer.
//!
//! Services validate input, call the repositories and shape results into the DTOs
//! returned by the API. Reference arrays are turned into display labels through the
//! shared [`resolver`].

pub mod agent;
pub mod arsenal;
pub mod chat;
pub mod event;
pub mod resolver;
