//! Capability - Named permissions over target entities
//!
//! The capability required to message a target is a closed mapping from
//! the target's type, not a string assembled at runtime.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TargetType;

/// Permissions an actor may hold over a specific entity instance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    ModifyForm,
    ModifyProject,
    ModifyUser,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ModifyForm => "modify-form",
            Capability::ModifyProject => "modify-project",
            Capability::ModifyUser => "modify-user",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TargetType {
    /// Capability required to add messages to a target of this type
    pub fn modify_capability(self) -> Capability {
        match self {
            TargetType::Form => Capability::ModifyForm,
            TargetType::Project => Capability::ModifyProject,
            TargetType::User => Capability::ModifyUser,
        }
    }
}
