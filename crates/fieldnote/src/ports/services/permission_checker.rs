//! Permission Checker Port
//!
//! Capability-based authorization over a specific entity instance, not
//! merely the entity category.

use async_trait::async_trait;

use crate::domain::{errors::MessagingError, Actor, Capability, Target};

/// Authorization interface consulted before any record is appended
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    /// Whether `actor` holds `capability` on this concrete target
    async fn has_capability(
        &self,
        actor: &Actor,
        capability: Capability,
        target: &Target,
    ) -> Result<bool, MessagingError>;
}
