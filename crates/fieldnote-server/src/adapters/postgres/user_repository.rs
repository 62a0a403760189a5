//! PostgreSQL lookup of user targets

use async_trait::async_trait;
use sqlx::PgPool;

use fieldnote::{MessagingError, Target, TargetRepository, TargetType};

/// PostgreSQL implementation of TargetRepository for users.
///
/// A user is their own owner, so messaging a user profile is always open
/// to that user and to anyone holding an explicit grant.
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
}

#[async_trait]
impl TargetRepository for PgUserRepository {
    fn target_type(&self) -> TargetType {
        TargetType::User
    }

    async fn fetch(&self, id: i64) -> Result<Option<Target>, MessagingError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| MessagingError::Repository(e.to_string()))?;

        Ok(row.map(|r| Target::new(TargetType::User, r.id, r.username, r.id)))
    }
}
