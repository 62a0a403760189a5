//! PostgreSQL implementation of PermissionChecker
//!
//! An actor holds a capability on a target when they own the target, or
//! when an explicit grant row exists for that exact entity instance.

use async_trait::async_trait;
use sqlx::PgPool;

use fieldnote::{Actor, Capability, MessagingError, PermissionChecker, Target};

/// PostgreSQL implementation of PermissionChecker
pub struct PgPermissionChecker {
    pool: PgPool,
}

impl PgPermissionChecker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionChecker for PgPermissionChecker {
    async fn has_capability(
        &self,
        actor: &Actor,
        capability: Capability,
        target: &Target,
    ) -> Result<bool, MessagingError> {
        if actor.id == target.owner_id {
            return Ok(true);
        }

        let granted = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM permission_grants
                WHERE user_id = $1 AND target_type = $2 AND target_id = $3 AND capability = $4
            )
            "#,
        )
        .bind(actor.id)
        .bind(target.target_type.to_string())
        .bind(target.id)
        .bind(capability.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MessagingError::Repository(e.to_string()))?;

        Ok(granted)
    }
}
