//! PostgreSQL lookup of form targets

use async_trait::async_trait;
use sqlx::PgPool;

use fieldnote::{MessagingError, Target, TargetRepository, TargetType};

/// PostgreSQL implementation of TargetRepository for forms
pub struct PgFormRepository {
    pool: PgPool,
}

impl PgFormRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct FormRow {
    id: i64,
    title: String,
    owner_id: i64,
}

#[async_trait]
impl TargetRepository for PgFormRepository {
    fn target_type(&self) -> TargetType {
        TargetType::Form
    }

    async fn fetch(&self, id: i64) -> Result<Option<Target>, MessagingError> {
        let row =
            sqlx::query_as::<_, FormRow>("SELECT id, title, owner_id FROM forms WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| MessagingError::Repository(e.to_string()))?;

        Ok(row.map(|r| Target::new(TargetType::Form, r.id, r.title, r.owner_id)))
    }
}
