pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::career::handlers as career;
use crate::case_studies::handlers as case_studies;
use crate::portfolios::handlers as portfolios;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/signup", post(auth::handle_signup))
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/google", post(auth::handle_google_login))
        .route(
            "/api/auth/me",
            get(auth::handle_get_me).patch(auth::handle_update_me),
        )
        // Résumés
        .route(
            "/api/resumes",
            get(resumes::handle_list).post(resumes::handle_create),
        )
        .route(
            "/api/resumes/enhance-bullet",
            post(resumes::handle_enhance_bullet),
        )
        .route(
            "/api/resumes/suggest-skills",
            post(resumes::handle_suggest_skills),
        )
        .route(
            "/api/resumes/:id",
            get(resumes::handle_get)
                .put(resumes::handle_update)
                .delete(resumes::handle_delete),
        )
        .route(
            "/api/resumes/:id/ai-summary",
            post(resumes::handle_ai_summary),
        )
        // Portfolios
        .route(
            "/api/portfolios",
            get(portfolios::handle_list).post(portfolios::handle_create),
        )
        .route(
            "/api/portfolios/generate-bio",
            post(portfolios::handle_generate_bio),
        )
        .route(
            "/api/portfolios/:id",
            get(portfolios::handle_get)
                .put(portfolios::handle_update)
                .delete(portfolios::handle_delete),
        )
        // Case studies
        .route(
            "/api/case-studies",
            get(case_studies::handle_list).post(case_studies::handle_create),
        )
        .route(
            "/api/case-studies/:id/generate",
            post(case_studies::handle_generate),
        )
        // Career tools
        .route("/api/jd-analyzer/analyze", post(career::handle_analyze_jd))
        .route("/api/recommendations", get(career::handle_recommendations))
        .route(
            "/api/cover-letter/generate",
            post(career::handle_cover_letter),
        )
        .with_state(state)
}
