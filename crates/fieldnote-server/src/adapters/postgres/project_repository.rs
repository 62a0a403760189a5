//! PostgreSQL lookup of project targets

use async_trait::async_trait;
use sqlx::PgPool;

use fieldnote::{MessagingError, Target, TargetRepository, TargetType};

/// PostgreSQL implementation of TargetRepository for projects
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    owner_id: i64,
}

#[async_trait]
impl TargetRepository for PgProjectRepository {
    fn target_type(&self) -> TargetType {
        TargetType::Project
    }

    async fn fetch(&self, id: i64) -> Result<Option<Target>, MessagingError> {
        let row =
            sqlx::query_as::<_, ProjectRow>("SELECT id, name, owner_id FROM projects WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| MessagingError::Repository(e.to_string()))?;

        Ok(row.map(|r| Target::new(TargetType::Project, r.id, r.name, r.owner_id)))
    }
}
