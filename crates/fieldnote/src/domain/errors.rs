//! Domain Errors
//!
//! Error taxonomy for messaging operations. The four creation outcomes
//! (unknown type, missing target, denied, not created) are distinct
//! variants so callers can render each one differently; they are never
//! collapsed into a generic failure.

use thiserror::Error;

use crate::domain::value_objects::TargetType;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown target type: {0}")]
    UnknownTargetType(String),

    #[error("target_id {target_id} not found for target type {target_type}")]
    TargetNotFound {
        target_type: TargetType,
        target_id: i64,
    },

    #[error("You do not have permission to add messages to target_id {0}.")]
    PermissionDenied(String),

    #[error("Message not created. Please retry.")]
    NotCreated,

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl MessagingError {
    pub fn blank_message() -> Self {
        Self::Validation("message may not be blank".to_string())
    }

    pub fn target_not_found(target_type: TargetType, target_id: i64) -> Self {
        Self::TargetNotFound {
            target_type,
            target_id,
        }
    }
}
