//! Token Repository Port
//!
//! API token lookup used by the auth middleware to resolve an actor.

use async_trait::async_trait;

use crate::domain::{errors::MessagingError, Actor};

/// Resolves API token keys to platform users
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// The actor a token key belongs to, or None for unknown keys
    async fn find_actor(&self, key: &str) -> Result<Option<Actor>, MessagingError>;
}
