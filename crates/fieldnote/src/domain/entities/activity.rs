//! Activity Record Entity
//!
//! An append-only log entry of who did what to which target. Messages are
//! activity records with the `"message"` verb; once created a record is
//! never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Actor, Target};
use crate::domain::value_objects::TargetType;

/// Verb recorded for messages created by the messaging service
pub const MESSAGE_VERB: &str = "message";

/// A single entry in the activity stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    /// Account id of the user who produced the record
    pub actor_id: i64,
    /// Username at the time of the event (denormalized for display)
    pub actor_name: String,
    pub verb: String,
    pub target_type: TargetType,
    pub target_id: i64,
    /// Message text for `"message"` records
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Create a new `"message"` record for a resolved target
    pub fn message(actor: &Actor, target: &Target, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            actor_id: actor.id,
            actor_name: actor.username.clone(),
            verb: MESSAGE_VERB.to_string(),
            target_type: target.target_type,
            target_id: target.id,
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Whether this record was created by the messaging service
    pub fn is_message(&self) -> bool {
        self.verb == MESSAGE_VERB
    }
}
