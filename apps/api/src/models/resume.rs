use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A résumé. `content` is an opaque document owned by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeCreate {
    pub title: String,
    #[serde(default = "empty_object")]
    pub content: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeUpdate {
    pub title: Option<String>,
    pub content: Option<Value>,
}

pub(crate) fn empty_object() -> Value {
    Value::Object(Default::default())
}
