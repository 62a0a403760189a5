//! PostgreSQL implementation of TokenRepository

use async_trait::async_trait;
use sqlx::PgPool;

use fieldnote::{Actor, MessagingError, TokenRepository};

/// PostgreSQL implementation of TokenRepository
pub struct PgTokenRepository {
    pool: PgPool,
}

impl PgTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct TokenRow {
    user_id: i64,
    username: String,
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn find_actor(&self, key: &str) -> Result<Option<Actor>, MessagingError> {
        let row = sqlx::query_as::<_, TokenRow>(
            r#"
            SELECT t.user_id, u.username
            FROM api_tokens t
            JOIN users u ON u.id = t.user_id
            WHERE t.key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MessagingError::Repository(e.to_string()))?;

        Ok(row.map(|r| Actor::new(r.user_id, r.username)))
    }
}
