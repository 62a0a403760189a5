//! PostgreSQL implementation of ActivityLog

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use fieldnote::{Activity, ActivityLog, MessagingError, TargetType, MESSAGE_VERB};

/// PostgreSQL implementation of ActivityLog
pub struct PgActivityLog {
    pool: PgPool,
}

impl PgActivityLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ActivityRow {
    id: Uuid,
    actor_id: i64,
    actor_name: String,
    verb: String,
    target_type: String,
    target_id: i64,
    description: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<ActivityRow> for Activity {
    type Error = MessagingError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        let target_type: TargetType = row
            .target_type
            .parse()
            .map_err(MessagingError::Repository)?;

        Ok(Self {
            id: row.id,
            actor_id: row.actor_id,
            actor_name: row.actor_name,
            verb: row.verb,
            target_type,
            target_id: row.target_id,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ActivityLog for PgActivityLog {
    async fn record(&self, activity: &Activity) -> Result<Activity, MessagingError> {
        let row = sqlx::query_as::<_, ActivityRow>(
            r#"
            INSERT INTO activities (id, actor_id, actor_name, verb, target_type, target_id, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(activity.id)
        .bind(activity.actor_id)
        .bind(&activity.actor_name)
        .bind(&activity.verb)
        .bind(activity.target_type.to_string())
        .bind(activity.target_id)
        .bind(&activity.description)
        .bind(activity.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MessagingError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Activity>, MessagingError> {
        let row = sqlx::query_as::<_, ActivityRow>("SELECT * FROM activities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| MessagingError::Repository(e.to_string()))?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_messages_for_target(
        &self,
        target_type: TargetType,
        target_id: i64,
        limit: i64,
    ) -> Result<Vec<Activity>, MessagingError> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT * FROM activities
            WHERE verb = $1 AND target_type = $2 AND target_id = $3
            ORDER BY created_at DESC, id DESC
            LIMIT $4
            "#,
        )
        .bind(MESSAGE_VERB)
        .bind(target_type.to_string())
        .bind(target_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MessagingError::Repository(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
