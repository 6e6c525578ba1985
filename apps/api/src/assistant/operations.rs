//! AI operations: prompt → model gateway → normalized result.
//!
//! Flow for structured operations: build prompt → `ModelGateway::complete` →
//! `extract` with the call site's own fallback. Gateway failures propagate as
//! `LlmError`; unusable replies never do.

use serde_json::{json, Value};

use crate::assistant::prompts;
use crate::llm_client::extract::{extract, Extracted, Shape};
use crate::llm_client::prompts::PromptSpec;
use crate::llm_client::{LlmError, ModelGateway};

// ────────────────────────────────────────────────────────────────────────────
// Fallback payloads
// ────────────────────────────────────────────────────────────────────────────

pub fn case_study_fallback(raw: &str) -> Value {
    json!({ "raw_text": raw })
}

pub fn jd_match_fallback() -> Value {
    json!({
        "match_score": 0,
        "matched_skills": [],
        "missing_skills": [],
        "suggestions": [
            {"title": "Error", "description": "Could not parse AI response."}
        ]
    })
}

pub fn recommendations_fallback() -> Value {
    json!({
        "competitiveness_score": 0,
        "action_items": [],
        "interview_probability_boost": "+0%"
    })
}

pub fn skills_fallback() -> Value {
    json!([])
}

pub fn portfolio_bio_fallback() -> Value {
    json!({ "tagline": "", "bio": "" })
}

// ────────────────────────────────────────────────────────────────────────────
// Plain-text operations
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_resume_summary(
    llm: &dyn ModelGateway,
    job_title: &str,
    experience_summary: &str,
) -> Result<String, LlmError> {
    let raw = send(llm, prompts::resume_summary(job_title, experience_summary)).await?;
    Ok(raw.trim().to_string())
}

pub async fn enhance_bullet(
    llm: &dyn ModelGateway,
    bullet: &str,
    job_title: &str,
    company: &str,
) -> Result<String, LlmError> {
    let raw = send(llm, prompts::enhance_bullet(bullet, job_title, company)).await?;
    Ok(clean_bullet(&raw).to_string())
}

pub async fn generate_cover_letter(
    llm: &dyn ModelGateway,
    resume_content: &Value,
    job_description: &str,
    company_name: &str,
) -> Result<String, LlmError> {
    let raw = send(
        llm,
        prompts::cover_letter(resume_content, job_description, company_name),
    )
    .await?;
    Ok(raw.trim().to_string())
}

/// Trims the reply, then any wrapping double quotes, then any wrapping single quotes.
pub fn clean_bullet(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim_matches('\'')
}

// ────────────────────────────────────────────────────────────────────────────
// Structured operations
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_case_study(
    llm: &dyn ModelGateway,
    inputs: &Value,
) -> Result<Extracted, LlmError> {
    let raw = send(llm, prompts::case_study(inputs)).await?;
    Ok(extract(&raw, Shape::Object, || case_study_fallback(&raw)))
}

pub async fn analyze_jd_match(
    llm: &dyn ModelGateway,
    job_description: &str,
    resume_content: &Value,
) -> Result<Extracted, LlmError> {
    let raw = send(llm, prompts::jd_match(job_description, resume_content)).await?;
    Ok(extract(&raw, Shape::Object, jd_match_fallback))
}

pub async fn get_recommendations(
    llm: &dyn ModelGateway,
    resumes: &[Value],
    portfolios: &[Value],
) -> Result<Extracted, LlmError> {
    let raw = send(llm, prompts::recommendations(resumes, portfolios)).await?;
    Ok(extract(&raw, Shape::Object, recommendations_fallback))
}

pub async fn suggest_skills(
    llm: &dyn ModelGateway,
    job_title: &str,
    current_skills: &[String],
    experience_summary: &str,
) -> Result<Extracted, LlmError> {
    let raw = send(
        llm,
        prompts::suggest_skills(job_title, current_skills, experience_summary),
    )
    .await?;
    Ok(extract(&raw, Shape::Array, skills_fallback))
}

pub async fn generate_portfolio_bio(
    llm: &dyn ModelGateway,
    name: &str,
    title: &str,
    skills: &[String],
    experience: &str,
) -> Result<Extracted, LlmError> {
    let raw = send(
        llm,
        prompts::portfolio_bio(name, title, skills, experience),
    )
    .await?;
    Ok(extract(&raw, Shape::Object, portfolio_bio_fallback))
}

async fn send(llm: &dyn ModelGateway, prompt: PromptSpec) -> Result<String, LlmError> {
    llm.complete(prompt.system, &prompt.user).await
}
