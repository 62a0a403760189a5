//! Activity Store Port
//!
//! Append-only store with subscriber fan-out. The store carries an
//! explicit single-responder contract: `append` returns the record
//! produced by the canonical activity-log handler, or `None` when no
//! canonical handler is wired in. Subscriber outcomes never change the
//! result; the record is durable before any subscriber sees it.

use async_trait::async_trait;

use crate::domain::{errors::MessagingError, Activity};

/// Append-only activity store
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Append a record. `Ok(None)` means no canonical handler produced
    /// a persisted record; callers treat that as "not created".
    async fn append(&self, activity: &Activity) -> Result<Option<Activity>, MessagingError>;
}

/// Independent, best-effort subscriber notified after persistence
#[async_trait]
pub trait ActivityObserver: Send + Sync {
    /// Short name used in logs when delivery fails
    fn name(&self) -> &'static str;

    async fn notify(&self, activity: &Activity) -> Result<(), MessagingError>;
}
