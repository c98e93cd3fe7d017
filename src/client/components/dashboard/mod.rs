pub mod layout;
pub mod navbar;

pub use layout::DashboardLayout;
pub use navbar::DashboardNavbar;
