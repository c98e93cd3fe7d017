//! Utility functions shared by the server services and controllers.

pub mod time;
