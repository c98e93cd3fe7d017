use crate::model::agent::AgentDto;

/// Viewer shared with every dashboard page through context
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerState {
    pub viewer: Option<AgentDto>,
    /// Set once the viewer request has completed, found or not
    pub fetched: bool,
}

impl ViewerState {
    pub fn is_admin(&self) -> bool {
        self.viewer.as_ref().is_some_and(|viewer| viewer.is_admin())
    }
}
