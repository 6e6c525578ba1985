//! In-memory `Store` used by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::case_study::{CaseStudyCreate, CaseStudyRow};
use crate::models::portfolio::{PortfolioCreate, PortfolioRow, PortfolioUpdate};
use crate::models::resume::{empty_object, ResumeCreate, ResumeRow, ResumeUpdate};
use crate::models::user::{NewUser, UserRow, UserUpdate};
use crate::store::Store;

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<UserRow>>,
    resumes: Mutex<Vec<ResumeRow>>,
    portfolios: Mutex<Vec<PortfolioRow>>,
    case_studies: Mutex<Vec<CaseStudyRow>>,
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<UserRow>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<UserRow, AppError> {
        let row = UserRow {
            id: Uuid::new_v4(),
            email: user.email,
            full_name: user.full_name,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_user(
        &self,
        id: Uuid,
        update: &UserUpdate,
    ) -> Result<Option<UserRow>, AppError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(full_name) = &update.full_name {
            user.full_name = full_name.clone();
        }
        if let Some(email) = &update.email {
            user.email = email.clone();
        }
        Ok(Some(user.clone()))
    }

    async fn list_resumes(&self, user_id: Uuid) -> Result<Vec<ResumeRow>, AppError> {
        let resumes = self.resumes.lock().unwrap();
        Ok(resumes.iter().filter(|r| r.user_id == user_id).cloned().collect())
    }

    async fn get_resume(&self, user_id: Uuid, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        let resumes = self.resumes.lock().unwrap();
        Ok(resumes
            .iter()
            .find(|r| r.id == id && r.user_id == user_id)
            .cloned())
    }

    async fn insert_resume(
        &self,
        user_id: Uuid,
        new: ResumeCreate,
    ) -> Result<ResumeRow, AppError> {
        let now = Utc::now();
        let row = ResumeRow {
            id: Uuid::new_v4(),
            user_id,
            title: new.title,
            content: new.content,
            created_at: now,
            updated_at: now,
        };
        self.resumes.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_resume(
        &self,
        user_id: Uuid,
        id: Uuid,
        update: ResumeUpdate,
    ) -> Result<Option<ResumeRow>, AppError> {
        let mut resumes = self.resumes.lock().unwrap();
        let Some(row) = resumes
            .iter_mut()
            .find(|r| r.id == id && r.user_id == user_id)
        else {
            return Ok(None);
        };
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(content) = update.content {
            row.content = content;
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_resume(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let mut resumes = self.resumes.lock().unwrap();
        let before = resumes.len();
        resumes.retain(|r| !(r.id == id && r.user_id == user_id));
        Ok(resumes.len() < before)
    }

    async fn list_portfolios(&self, user_id: Uuid) -> Result<Vec<PortfolioRow>, AppError> {
        let portfolios = self.portfolios.lock().unwrap();
        Ok(portfolios
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_portfolio(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<PortfolioRow>, AppError> {
        let portfolios = self.portfolios.lock().unwrap();
        Ok(portfolios
            .iter()
            .find(|p| p.id == id && p.user_id == user_id)
            .cloned())
    }

    async fn insert_portfolio(
        &self,
        user_id: Uuid,
        new: PortfolioCreate,
    ) -> Result<PortfolioRow, AppError> {
        let now = Utc::now();
        let row = PortfolioRow {
            id: Uuid::new_v4(),
            user_id,
            title: new.title,
            config: new.config,
            subdomain: new.subdomain,
            is_published: false,
            created_at: now,
            updated_at: now,
        };
        self.portfolios.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_portfolio(
        &self,
        user_id: Uuid,
        id: Uuid,
        update: PortfolioUpdate,
    ) -> Result<Option<PortfolioRow>, AppError> {
        let mut portfolios = self.portfolios.lock().unwrap();
        let Some(row) = portfolios
            .iter_mut()
            .find(|p| p.id == id && p.user_id == user_id)
        else {
            return Ok(None);
        };
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(config) = update.config {
            row.config = config;
        }
        if let Some(subdomain) = update.subdomain {
            row.subdomain = Some(subdomain);
        }
        if let Some(is_published) = update.is_published {
            row.is_published = is_published;
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_portfolio(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let mut portfolios = self.portfolios.lock().unwrap();
        let before = portfolios.len();
        portfolios.retain(|p| !(p.id == id && p.user_id == user_id));
        Ok(portfolios.len() < before)
    }

    async fn list_case_studies(&self, user_id: Uuid) -> Result<Vec<CaseStudyRow>, AppError> {
        let case_studies = self.case_studies.lock().unwrap();
        Ok(case_studies
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_case_study(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<CaseStudyRow>, AppError> {
        let case_studies = self.case_studies.lock().unwrap();
        Ok(case_studies
            .iter()
            .find(|c| c.id == id && c.user_id == user_id)
            .cloned())
    }

    async fn insert_case_study(
        &self,
        user_id: Uuid,
        new: CaseStudyCreate,
    ) -> Result<CaseStudyRow, AppError> {
        let now = Utc::now();
        let row = CaseStudyRow {
            id: Uuid::new_v4(),
            user_id,
            title: new.title,
            inputs: new.inputs,
            generated_content: empty_object(),
            created_at: now,
            updated_at: now,
        };
        self.case_studies.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn set_generated_content(
        &self,
        user_id: Uuid,
        id: Uuid,
        generated: &Value,
    ) -> Result<Option<CaseStudyRow>, AppError> {
        let mut case_studies = self.case_studies.lock().unwrap();
        let Some(row) = case_studies
            .iter_mut()
            .find(|c| c.id == id && c.user_id == user_id)
        else {
            return Ok(None);
        };
        row.generated_content = generated.clone();
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }
}
