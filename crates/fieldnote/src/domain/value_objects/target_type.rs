//! TargetType - Classification of message targets
//!
//! Closed enumeration of platform entities a message can be attached to.
//! Parsing a tag outside the enumeration fails, which is what keeps
//! unknown target types from ever reaching an entity lookup.

use serde::{Deserialize, Serialize};

/// Entity categories a message can target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Form,
    Project,
    User,
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetType::Form => write!(f, "form"),
            TargetType::Project => write!(f, "project"),
            TargetType::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for TargetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "form" => Ok(TargetType::Form),
            "project" => Ok(TargetType::Project),
            "user" => Ok(TargetType::User),
            _ => Err(format!("Unknown target type: {}", s)),
        }
    }
}
