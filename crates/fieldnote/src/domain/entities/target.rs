//! Target Entity
//!
//! Uniform projection of the platform entities a message can be attached
//! to (forms, projects, users). Lookup adapters map their own rows into
//! this shape so the messaging pipeline never handles entity-specific
//! types.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TargetType;

/// A resolved message target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub target_type: TargetType,
    pub id: i64,
    /// Display name (form title, project name, username)
    pub name: String,
    /// Owning user account; a user owns itself
    pub owner_id: i64,
}

impl Target {
    pub fn new(target_type: TargetType, id: i64, name: impl Into<String>, owner_id: i64) -> Self {
        Self {
            target_type,
            id,
            name: name.into(),
            owner_id,
        }
    }
}
