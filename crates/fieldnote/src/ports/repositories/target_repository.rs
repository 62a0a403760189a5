//! Target Repository Port
//!
//! Entity-category descriptor: exact primary-identifier lookup for one
//! target type. One implementation exists per entry in the closed
//! [`TargetType`] enumeration.

use async_trait::async_trait;

use crate::domain::{errors::MessagingError, Target, TargetType};

/// Lookup interface for one category of message targets
#[async_trait]
pub trait TargetRepository: Send + Sync {
    /// The target type this repository serves
    fn target_type(&self) -> TargetType;

    /// Fetch the entity with this primary id, or None if absent.
    /// No partial or fuzzy matching.
    async fn fetch(&self, id: i64) -> Result<Option<Target>, MessagingError>;
}
