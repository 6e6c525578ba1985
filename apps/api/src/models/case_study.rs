use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::resume::empty_object;

/// A case study. `inputs` holds the user's free-form project notes
/// (project_name, role, tech_stack, problem, solution, results);
/// `generated_content` holds the last AI generation, structured or fallback.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CaseStudyRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub inputs: Value,
    pub generated_content: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseStudyCreate {
    pub title: String,
    #[serde(default = "empty_object")]
    pub inputs: Value,
}
