//! Helpers shared by the controllers.

pub mod get_viewer;
