use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    /// Argon2 PHC string. Never serialized.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&UserRow> for UserResponse {
    fn from(row: &UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email.clone(),
            full_name: row.full_name.clone(),
            created_at: row.created_at,
        }
    }
}

pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}
