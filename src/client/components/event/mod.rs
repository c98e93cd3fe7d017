pub mod card;
pub mod create_dialog;
pub mod form;

pub use card::EventCard;
pub use create_dialog::CreateEventDialog;
pub use form::EventForm;
