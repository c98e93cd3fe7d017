//! Best-effort resolution of document references into display labels.
//!
//! Every reference in a list is looked up concurrently. The returned labels are positionally
//! aligned with the input: same length, same order, duplicates kept. A missing target or a
//! failed lookup is replaced by a fixed sentinel and never aborts the sibling lookups.
//! Nothing is cached between calls.

use std::{fmt::Display, future::Future};

use dioxus_logger::tracing;
use futures::future::join_all;
use sea_orm::ConnectionTrait;

use crate::server::data::{agent::AgentRepository, arsenal::ArsenalRepository, event::EventRepository};

/// Labels substituted for references that cannot be shown by name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sentinels {
    /// Noun used in log messages
    pub kind: &'static str,
    /// The target exists but its projected field is empty, `None` keeps the label as is
    pub unnamed: Option<&'static str>,
    /// The target does not exist
    pub missing: &'static str,
    /// The lookup itself failed
    pub failed: &'static str,
}

pub const EVENT_SENTINELS: Sentinels = Sentinels {
    kind: "event",
    unnamed: Some("Unknown Event"),
    missing: "Unknown Event (Reference not found)",
    failed: "Error loading event",
};

pub const AGENT_SENTINELS: Sentinels = Sentinels {
    kind: "agent",
    unnamed: None,
    missing: "Unknown Agent",
    failed: "Unknown Agent",
};

pub const ARSENAL_SENTINELS: Sentinels = Sentinels {
    kind: "arsenal",
    unnamed: Some("Unnamed Arsenal"),
    missing: "Unknown Arsenal",
    failed: "Unknown Arsenal",
};

/// Resolves each reference with `lookup` and projects found targets with `project`.
pub async fn resolve_labels<T, E, F, Fut, P>(
    refs: &[i32],
    lookup: F,
    project: P,
    sentinels: Sentinels,
) -> Vec<String>
where
    E: Display,
    F: Fn(i32) -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
    P: Fn(&T) -> String,
{
    let lookups = refs.iter().map(|&reference| {
        let lookup = lookup(reference);
        async move { (reference, lookup.await) }
    });

    join_all(lookups)
        .await
        .into_iter()
        .map(|(reference, result)| match result {
            Ok(Some(target)) => {
                let label = project(&target);
                match sentinels.unnamed {
                    Some(unnamed) if label.trim().is_empty() => unnamed.to_string(),
                    _ => label,
                }
            }
            Ok(None) => sentinels.missing.to_string(),
            Err(e) => {
                tracing::warn!(
                    reference = reference,
                    "Failed to resolve {} reference: {}",
                    sentinels.kind,
                    e
                );

                sentinels.failed.to_string()
            }
        })
        .collect()
}

/// Resolves the reference lists stored in the database
pub struct ReferenceResolver<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReferenceResolver<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Event references to event names
    pub async fn event_names(&self, refs: &[i32]) -> Vec<String> {
        let db = self.db;

        resolve_labels(
            refs,
            |event_id| async move { EventRepository::new(db).get_by_id(event_id).await },
            |event| event.event_name.clone(),
            EVENT_SENTINELS,
        )
        .await
    }

    /// Agent references to `"{first_name} {last_name}"`
    pub async fn agent_names(&self, refs: &[i32]) -> Vec<String> {
        let db = self.db;

        resolve_labels(
            refs,
            |agent_id| async move { AgentRepository::new(db).get_by_id(agent_id).await },
            |agent| format!("{} {}", agent.first_name, agent.last_name),
            AGENT_SENTINELS,
        )
        .await
    }

    /// Equipment references to equipment names
    pub async fn arsenal_names(&self, refs: &[i32]) -> Vec<String> {
        let db = self.db;

        resolve_labels(
            refs,
            |item_id| async move { ArsenalRepository::new(db).get_by_id(item_id).await },
            |item| item.name.clone(),
            ARSENAL_SENTINELS,
        )
        .await
    }
}
