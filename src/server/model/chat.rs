use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Namespace of chat roots in the real-time store
pub const CHAT_KEY_PREFIX: &str = "chats";

/// Key of an event's chat root, `{prefix}:{event_id}`
pub fn chat_key(prefix: &str, event_id: i32) -> String {
    format!("{}:{}", prefix, event_id)
}

/// Chat root provisioned for every new event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRoot {
    pub info: ChatInfo,
    /// Message container, empty at creation
    pub messages: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatInfo {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl ChatRoot {
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            info: ChatInfo {
                name: name.into(),
                created_at,
            },
            messages: BTreeMap::new(),
        }
    }
}
