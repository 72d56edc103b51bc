//! Account persistence. Email uniqueness is enforced by the `users.email`
//! unique index; a violating insert surfaces as `AppError::Conflict`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::account::AccountRow;

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRow>, AppError>;

    async fn insert(&self, email: &str, password_hash: &str) -> Result<AccountRow, AppError>;
}

pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRow>, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert(&self, email: &str, password_hash: &str) -> Result<AccountRow, AppError> {
        sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(email.to_string())
            }
            other => AppError::Database(other),
        })
    }
}

#[cfg(test)]
pub use memory::InMemoryAccountStore;
