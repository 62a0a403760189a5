//! Activity Log Port
//!
//! The canonical persister of activity records. Exactly one
//! implementation is wired into the activity store; its output is the
//! result of a creation request.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::MessagingError, Activity, TargetType};

/// Append-only persistence interface for activity records
#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// Durably append a record, returning the persisted row
    async fn record(&self, activity: &Activity) -> Result<Activity, MessagingError>;

    /// Find a record by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Activity>, MessagingError>;

    /// Message records for a target, newest first
    async fn find_messages_for_target(
        &self,
        target_type: TargetType,
        target_id: i64,
        limit: i64,
    ) -> Result<Vec<Activity>, MessagingError>;
}
