use serde::{Deserialize, Serialize};

/// Role granting unrestricted visibility of the event board
pub const ADMIN_ROLE: &str = "admin";

/// A staff member assignable to events
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AgentDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl AgentDto {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
