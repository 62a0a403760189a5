//! Message Application Service (Use Case)
//!
//! Orchestrates message creation and retrieval over the target resolver,
//! permission checker and activity store ports.

use std::sync::Arc;

use uuid::Uuid;

use fieldnote::{
    Activity, ActivityLog, ActivityStore, Actor, MessagingError, PermissionChecker, TargetRegistry,
};

const DEFAULT_LIST_LIMIT: i64 = 50;
const MAX_LIST_LIMIT: i64 = 100;

/// Application service for the messaging stream
pub struct MessageService<S: ActivityStore> {
    targets: TargetRegistry,
    permissions: Arc<dyn PermissionChecker>,
    store: Arc<S>,
    log: Arc<dyn ActivityLog>,
}

impl<S: ActivityStore> MessageService<S> {
    pub fn new(
        targets: TargetRegistry,
        permissions: Arc<dyn PermissionChecker>,
        store: Arc<S>,
        log: Arc<dyn ActivityLog>,
    ) -> Self {
        Self {
            targets,
            permissions,
            store,
            log,
        }
    }

    /// Create a message on a target.
    ///
    /// The pipeline short-circuits on the first failure: validate the
    /// text, resolve the target type, fetch the entity, check the modify
    /// capability, then append exactly one record. Nothing is written on
    /// any failing branch.
    pub async fn create(
        &self,
        actor: &Actor,
        text: &str,
        target_type: &str,
        target_id: i64,
    ) -> Result<Activity, MessagingError> {
        if text.trim().is_empty() {
            return Err(MessagingError::blank_message());
        }

        let repository = self.targets.resolve(target_type)?;

        let target = repository
            .fetch(target_id)
            .await?
            .ok_or_else(|| MessagingError::target_not_found(repository.target_type(), target_id))?;

        let capability = target.target_type.modify_capability();
        if !self
            .permissions
            .has_capability(actor, capability, &target)
            .await?
        {
            return Err(MessagingError::PermissionDenied(target.name.clone()));
        }

        let activity = Activity::message(actor, &target, text);
        let created = self
            .store
            .append(&activity)
            .await?
            .ok_or(MessagingError::NotCreated)?;

        tracing::info!(
            "Message {} created by {} on {} {}",
            created.id,
            actor.username,
            created.target_type,
            created.target_id
        );

        Ok(created)
    }

    /// List messages attached to a target, newest first.
    ///
    /// A target type that parses but has no matching entity yields an
    /// empty list, not an error.
    pub async fn list(
        &self,
        target_type: &str,
        target_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<Activity>, MessagingError> {
        let repository = self.targets.resolve(target_type)?;
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);

        self.log
            .find_messages_for_target(repository.target_type(), target_id, limit)
            .await
    }

    /// Fetch a single message record by id
    pub async fn get(&self, id: Uuid) -> Result<Option<Activity>, MessagingError> {
        Ok(self.log.find_by_id(id).await?.filter(Activity::is_message))
    }
}
