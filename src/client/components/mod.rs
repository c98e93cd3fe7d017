pub mod arsenal;
pub mod confirm_dialog;
pub mod dashboard;
pub mod event;
pub mod page;

pub use confirm_dialog::ConfirmDialog;
pub use page::Page;
