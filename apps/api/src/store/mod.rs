//! Record stores — users, résumés, portfolios and case studies.
//!
//! Plain owner-scoped CRUD: every read and write of a user-owned record is filtered by
//! `user_id`, so a record that exists but belongs to someone else is simply "not found".
//!
//! `AppState` holds an `Arc<dyn Store>`. Production uses `PgStore`; handler tests use
//! the in-memory `MemoryStore`.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::case_study::{CaseStudyCreate, CaseStudyRow};
use crate::models::portfolio::{PortfolioCreate, PortfolioRow, PortfolioUpdate};
use crate::models::resume::{ResumeCreate, ResumeRow, ResumeUpdate};
use crate::models::user::{NewUser, UserRow, UserUpdate};

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    // ── users ──────────────────────────────────────────────────────────────
    async fn find_user(&self, id: Uuid) -> Result<Option<UserRow>, AppError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError>;
    async fn insert_user(&self, user: NewUser) -> Result<UserRow, AppError>;
    async fn update_user(&self, id: Uuid, update: &UserUpdate)
        -> Result<Option<UserRow>, AppError>;

    // ── résumés ────────────────────────────────────────────────────────────
    async fn list_resumes(&self, user_id: Uuid) -> Result<Vec<ResumeRow>, AppError>;
    async fn get_resume(&self, user_id: Uuid, id: Uuid) -> Result<Option<ResumeRow>, AppError>;
    async fn insert_resume(&self, user_id: Uuid, new: ResumeCreate)
        -> Result<ResumeRow, AppError>;
    async fn update_resume(
        &self,
        user_id: Uuid,
        id: Uuid,
        update: ResumeUpdate,
    ) -> Result<Option<ResumeRow>, AppError>;
    /// Returns `false` when nothing was deleted.
    async fn delete_resume(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError>;

    // ── portfolios ─────────────────────────────────────────────────────────
    async fn list_portfolios(&self, user_id: Uuid) -> Result<Vec<PortfolioRow>, AppError>;
    async fn get_portfolio(&self, user_id: Uuid, id: Uuid)
        -> Result<Option<PortfolioRow>, AppError>;
    async fn insert_portfolio(
        &self,
        user_id: Uuid,
        new: PortfolioCreate,
    ) -> Result<PortfolioRow, AppError>;
    async fn update_portfolio(
        &self,
        user_id: Uuid,
        id: Uuid,
        update: PortfolioUpdate,
    ) -> Result<Option<PortfolioRow>, AppError>;
    async fn delete_portfolio(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError>;

    // ── case studies ───────────────────────────────────────────────────────
    async fn list_case_studies(&self, user_id: Uuid) -> Result<Vec<CaseStudyRow>, AppError>;
    async fn get_case_study(&self, user_id: Uuid, id: Uuid)
        -> Result<Option<CaseStudyRow>, AppError>;
    async fn insert_case_study(
        &self,
        user_id: Uuid,
        new: CaseStudyCreate,
    ) -> Result<CaseStudyRow, AppError>;
    async fn set_generated_content(
        &self,
        user_id: Uuid,
        id: Uuid,
        generated: &Value,
    ) -> Result<Option<CaseStudyRow>, AppError>;
}
