//! Shared in-memory fakes for exercising the service and routes without
//! a database.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use fieldnote::{
    Activity, ActivityLog, Actor, Capability, MessagingError, PermissionChecker, Target,
    TargetRepository, TargetType, TokenRepository,
};

/// In-memory activity log
#[derive(Default)]
pub struct MemoryLog {
    rows: Mutex<Vec<Activity>>,
}

impl MemoryLog {
    /// Everything recorded so far, in insertion order
    pub fn appended(&self) -> Vec<Activity> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActivityLog for MemoryLog {
    async fn record(&self, activity: &Activity) -> Result<Activity, MessagingError> {
        self.rows.lock().unwrap().push(activity.clone());
        Ok(activity.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Activity>, MessagingError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_messages_for_target(
        &self,
        target_type: TargetType,
        target_id: i64,
        limit: i64,
    ) -> Result<Vec<Activity>, MessagingError> {
        let rows = self.rows.lock().unwrap();
        let mut matches: Vec<Activity> = rows
            .iter()
            .filter(|a| a.is_message() && a.target_type == target_type && a.target_id == target_id)
            .cloned()
            .collect();
        // newest first, id breaks created_at ties like the Postgres query
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        matches.truncate(limit as usize);
        Ok(matches)
    }
}

/// Fixed set of targets for one target type
pub struct FakeTargets {
    target_type: TargetType,
    rows: Vec<Target>,
}

impl FakeTargets {
    pub fn new(target_type: TargetType, rows: Vec<Target>) -> Self {
        Self { target_type, rows }
    }
}

#[async_trait]
impl TargetRepository for FakeTargets {
    fn target_type(&self) -> TargetType {
        self.target_type
    }

    async fn fetch(&self, id: i64) -> Result<Option<Target>, MessagingError> {
        Ok(self.rows.iter().find(|t| t.id == id).cloned())
    }
}

/// Grants every capability to the target owner and nobody else
pub struct OwnerOnly;

#[async_trait]
impl PermissionChecker for OwnerOnly {
    async fn has_capability(
        &self,
        actor: &Actor,
        _capability: Capability,
        target: &Target,
    ) -> Result<bool, MessagingError> {
        Ok(actor.id == target.owner_id)
    }
}

/// In-memory token lookup
#[derive(Default)]
pub struct MemoryTokens {
    keys: HashMap<String, Actor>,
}

impl MemoryTokens {
    pub fn with_token(mut self, key: &str, actor: Actor) -> Self {
        self.keys.insert(key.to_string(), actor);
        self
    }
}

#[async_trait]
impl TokenRepository for MemoryTokens {
    async fn find_actor(&self, key: &str) -> Result<Option<Actor>, MessagingError> {
        Ok(self.keys.get(key).cloned())
    }
}
