//! Server application core modules.
//!
//! HTTP routing, session handling, database access and the real-time chat store behind
//! the mission control dashboard. Requests flow controller → service → repository; the
//! reference resolver turns stored reference lists into display labels on the way out.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
