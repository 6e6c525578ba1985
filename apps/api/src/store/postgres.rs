use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::case_study::{CaseStudyCreate, CaseStudyRow};
use crate::models::portfolio::{PortfolioCreate, PortfolioRow, PortfolioUpdate};
use crate::models::resume::{ResumeCreate, ResumeRow, ResumeUpdate};
use crate::models::user::{NewUser, UserRow, UserUpdate};
use crate::store::Store;

/// PostgreSQL-backed store. Opaque documents live in JSONB columns.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<UserRow>, AppError> {
        let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert_user(&self, user: NewUser) -> Result<UserRow, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, full_name, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        info!("Created user {}", row.id);
        Ok(row)
    }

    async fn update_user(
        &self,
        id: Uuid,
        update: &UserUpdate,
    ) -> Result<Option<UserRow>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET full_name = COALESCE($2, full_name),
                email = COALESCE($3, email)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.full_name)
        .bind(&update.email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_resumes(&self, user_id: Uuid) -> Result<Vec<ResumeRow>, AppError> {
        let rows = sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_resume(&self, user_id: Uuid, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_resume(
        &self,
        user_id: Uuid,
        new: ResumeCreate,
    ) -> Result<ResumeRow, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, user_id, title, content)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&new.title)
        .bind(&new.content)
        .fetch_one(&self.pool)
        .await?;

        info!("Created resume {} for user {user_id}", row.id);
        Ok(row)
    }

    async fn update_resume(
        &self,
        user_id: Uuid,
        id: Uuid,
        update: ResumeUpdate,
    ) -> Result<Option<ResumeRow>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes
            SET title = COALESCE($3, title),
                content = COALESCE($4, content),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.title)
        .bind(&update.content)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_resume(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_portfolios(&self, user_id: Uuid) -> Result<Vec<PortfolioRow>, AppError> {
        let rows = sqlx::query_as::<_, PortfolioRow>(
            "SELECT * FROM portfolios WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_portfolio(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<PortfolioRow>, AppError> {
        let row = sqlx::query_as::<_, PortfolioRow>(
            "SELECT * FROM portfolios WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_portfolio(
        &self,
        user_id: Uuid,
        new: PortfolioCreate,
    ) -> Result<PortfolioRow, AppError> {
        let row = sqlx::query_as::<_, PortfolioRow>(
            r#"
            INSERT INTO portfolios (id, user_id, title, config, subdomain, is_published)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&new.title)
        .bind(&new.config)
        .bind(&new.subdomain)
        .fetch_one(&self.pool)
        .await?;

        info!("Created portfolio {} for user {user_id}", row.id);
        Ok(row)
    }

    async fn update_portfolio(
        &self,
        user_id: Uuid,
        id: Uuid,
        update: PortfolioUpdate,
    ) -> Result<Option<PortfolioRow>, AppError> {
        let row = sqlx::query_as::<_, PortfolioRow>(
            r#"
            UPDATE portfolios
            SET title = COALESCE($3, title),
                config = COALESCE($4, config),
                subdomain = COALESCE($5, subdomain),
                is_published = COALESCE($6, is_published),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.title)
        .bind(&update.config)
        .bind(&update.subdomain)
        .bind(update.is_published)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_portfolio(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM portfolios WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_case_studies(&self, user_id: Uuid) -> Result<Vec<CaseStudyRow>, AppError> {
        let rows = sqlx::query_as::<_, CaseStudyRow>(
            "SELECT * FROM case_studies WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_case_study(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<CaseStudyRow>, AppError> {
        let row = sqlx::query_as::<_, CaseStudyRow>(
            "SELECT * FROM case_studies WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_case_study(
        &self,
        user_id: Uuid,
        new: CaseStudyCreate,
    ) -> Result<CaseStudyRow, AppError> {
        let row = sqlx::query_as::<_, CaseStudyRow>(
            r#"
            INSERT INTO case_studies (id, user_id, title, inputs, generated_content)
            VALUES ($1, $2, $3, $4, '{}'::jsonb)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&new.title)
        .bind(&new.inputs)
        .fetch_one(&self.pool)
        .await?;

        info!("Created case study {} for user {user_id}", row.id);
        Ok(row)
    }

    async fn set_generated_content(
        &self,
        user_id: Uuid,
        id: Uuid,
        generated: &Value,
    ) -> Result<Option<CaseStudyRow>, AppError> {
        let row = sqlx::query_as::<_, CaseStudyRow>(
            r#"
            UPDATE case_studies
            SET generated_content = $3, updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(generated)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
