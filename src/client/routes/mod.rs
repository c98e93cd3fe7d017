pub mod arsenal;
pub mod event_detail;
pub mod home;
pub mod mission_control;
pub mod not_found;

pub use arsenal::Arsenal;
pub use event_detail::EventDetail;
pub use home::Home;
pub use mission_control::MissionControl;
pub use not_found::NotFound;
