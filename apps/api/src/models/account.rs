use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered user. Deliberately not `Serialize`: the hash never leaves the server.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
