//! Persistence of resume records behind a pluggable store.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; production uses `PgResumeStore`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumeRow};

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Inserts a record and returns it with its assigned identifier.
    async fn insert(&self, resume: &NewResume) -> Result<ResumeRow, AppError>;

    /// All records in identifier order.
    async fn list(&self) -> Result<Vec<ResumeRow>, AppError>;
}

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn insert(&self, resume: &NewResume) -> Result<ResumeRow, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (name, email, skills, experience)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, skills, experience, created_at
            "#,
        )
        .bind(&resume.name)
        .bind(&resume.email)
        .bind(&resume.skills)
        .bind(&resume.experience)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<ResumeRow>, AppError> {
        let rows = sqlx::query_as::<_, ResumeRow>(
            "SELECT id, name, email, skills, experience, created_at FROM resumes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
pub use memory::InMemoryResumeStore;
