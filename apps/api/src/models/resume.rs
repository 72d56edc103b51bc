use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A manually submitted resume. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub skills: String,
    pub experience: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /resume`. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct NewResume {
    pub name: String,
    pub email: String,
    pub skills: String,
    pub experience: String,
}
