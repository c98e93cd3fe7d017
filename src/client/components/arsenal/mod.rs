pub mod add_dialog;
pub mod table;

pub use add_dialog::AddArsenalDialog;
pub use table::ArsenalTable;
