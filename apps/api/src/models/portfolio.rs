use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::resume::empty_object;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub config: Value,
    pub subdomain: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioCreate {
    pub title: String,
    #[serde(default = "empty_object")]
    pub config: Value,
    pub subdomain: Option<String>,
}

/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioUpdate {
    pub title: Option<String>,
    pub config: Option<Value>,
    pub subdomain: Option<String>,
    pub is_published: Option<bool>,
}
