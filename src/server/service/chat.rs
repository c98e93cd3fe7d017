//! Chat roots in the real-time store.
//!
//! Every event owns one chat root, stored as a JSON document under `chats:{event_id}`.
//! Chat clients write messages into the root; this service only provisions and reads it.

use chrono::Utc;
use dioxus_logger::tracing;
use fred::prelude::*;

use crate::server::{
    error::Error,
    model::chat::{chat_key, ChatRoot, CHAT_KEY_PREFIX},
};

pub struct ChatService<'a> {
    pool: &'a Pool,
    /// Key namespace (allows isolating tests sharing one Valkey instance)
    prefix: String,
}

impl<'a> ChatService<'a> {
    /// Creates a new instance of [`ChatService`] using the `chats` namespace
    pub fn new(pool: &'a Pool) -> Self {
        Self::with_prefix(pool, CHAT_KEY_PREFIX)
    }

    /// Creates a new instance of [`ChatService`] with a custom key namespace
    pub fn with_prefix(pool: &'a Pool, prefix: impl Into<String>) -> Self {
        Self {
            pool,
            prefix: prefix.into(),
        }
    }

    /// Key of the chat root belonging to `event_id`
    pub fn key(&self, event_id: i32) -> String {
        chat_key(&self.prefix, event_id)
    }

    /// Writes a fresh chat root for an event, replacing any existing one
    pub async fn provision(&self, event_id: i32, event_name: &str) -> Result<ChatRoot, Error> {
        let root = ChatRoot::new(event_name, Utc::now());
        let document = serde_json::to_string(&root)?;

        self.pool
            .set::<(), _, _>(self.key(event_id), document, None, None, false)
            .await?;

        tracing::debug!(event_id = event_id, "Provisioned chat root");

        Ok(root)
    }

    /// Reads the chat root of an event, `Ok(None)` if it was never provisioned
    pub async fn get(&self, event_id: i32) -> Result<Option<ChatRoot>, Error> {
        let document: Option<String> = self.pool.get(self.key(event_id)).await?;

        match document {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }
}
