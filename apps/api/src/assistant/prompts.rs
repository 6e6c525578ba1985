// All LLM prompts for the AI assistant features.
// Builders are pure: no I/O, no validation beyond defaulting missing inputs to "".

use serde_json::Value;

use crate::llm_client::prompts::PromptSpec;

pub const RESUME_SUMMARY_SYSTEM: &str = "You are an expert resume writer. \
    Write a concise, impactful professional summary (3-4 sentences) for a resume. \
    Use strong action words and quantifiable achievements where possible. \
    Do not use first person pronouns.";

pub const CASE_STUDY_SYSTEM: &str = "You are a professional technical writer. \
    Generate a detailed case study from the following project details. \
    Return valid JSON with keys: executive_summary, challenge, solution, results.";

pub const JD_MATCH_SYSTEM: &str = "You are an ATS (Applicant Tracking System) expert. \
Analyze the match between a job description and a resume.
Return valid JSON with:
- match_score: integer 0-100
- matched_skills: list of skill strings found in both
- missing_skills: list of skill strings in JD but not in resume
- suggestions: list of objects with 'title' and 'description' keys for improvement tips";

pub const RECOMMENDATIONS_SYSTEM: &str = "You are an AI career coach. \
Based on the user's resumes and portfolios, provide actionable career improvement recommendations.
Return valid JSON with:
- competitiveness_score: integer 0-100
- action_items: list of objects with 'title', 'description', and 'priority' (high/medium/low) keys
- interview_probability_boost: string like '+12%'";

pub const ENHANCE_BULLET_SYSTEM: &str = "You are an expert resume writer. \
    Rewrite the given resume bullet point to be more impactful. \
    Use strong action verbs, include quantifiable results where possible, and follow the XYZ formula \
    (Accomplished [X] as measured by [Y], by doing [Z]). \
    Return ONLY the rewritten bullet point text, nothing else. \
    Do not add quotes or explanation.";

pub const SUGGEST_SKILLS_SYSTEM: &str = "You are a career coach and ATS expert. \
    Based on the job title and current skills, suggest 8-12 additional relevant skills \
    (technical and soft) that the candidate should add to strengthen their resume. \
    Return valid JSON: a flat array of skill strings. \
    Do NOT include skills already listed. Return ONLY the JSON array.";

pub const PORTFOLIO_BIO_SYSTEM: &str = "You are a creative copywriter specializing in personal branding. \
    Write a compelling portfolio hero tagline (1 short punchy sentence) and a longer about/bio paragraph \
    (3-4 sentences, friendly professional tone). \
    Return valid JSON with keys: tagline, bio. Return ONLY the JSON.";

pub const COVER_LETTER_SYSTEM: &str = "You are an expert career counselor. \
    Write a professional, tailored cover letter (3-4 paragraphs) that highlights the candidate's \
    relevant experience and skills from their resume, matched to the job description. \
    Use a confident but genuine tone. Include a proper greeting and sign-off. \
    Do NOT use placeholder brackets like [Company Name]; use the actual details provided. \
    Return ONLY the cover letter text.";

/// The case-study input keys that make it into the prompt, in prompt order.
const CASE_STUDY_FIELDS: [(&str, &str); 6] = [
    ("Project Name", "project_name"),
    ("Role", "role"),
    ("Tech Stack", "tech_stack"),
    ("Problem", "problem"),
    ("Solution", "solution"),
    ("Results", "results"),
];

pub fn resume_summary(job_title: &str, experience_summary: &str) -> PromptSpec {
    PromptSpec::new(
        RESUME_SUMMARY_SYSTEM,
        format!(
            "Job Title: {job_title}\nExperience Overview: {experience_summary}\n\nWrite the professional summary:"
        ),
    )
}

/// `inputs` is the free-form map stored on the case study. Absent keys render as "".
pub fn case_study(inputs: &Value) -> PromptSpec {
    let mut user = String::new();
    for (label, key) in CASE_STUDY_FIELDS {
        user.push_str(label);
        user.push_str(": ");
        user.push_str(&field_text(inputs.get(key)));
        user.push('\n');
    }
    user.push_str("\nGenerate the case study as JSON:");
    PromptSpec::new(CASE_STUDY_SYSTEM, user)
}

pub fn jd_match(job_description: &str, resume_content: &Value) -> PromptSpec {
    PromptSpec::new(
        JD_MATCH_SYSTEM,
        format!(
            "Job Description:\n{job_description}\n\nResume Content:\n{}\n\nAnalyze and return JSON:",
            pretty(resume_content)
        ),
    )
}

pub fn recommendations(resumes: &[Value], portfolios: &[Value]) -> PromptSpec {
    PromptSpec::new(
        RECOMMENDATIONS_SYSTEM,
        format!(
            "User's Resumes: {}\nUser's Portfolios: {}\n\nGenerate recommendations as JSON:",
            pretty(resumes),
            pretty(portfolios)
        ),
    )
}

/// Job title and company lines are only included when non-empty.
pub fn enhance_bullet(bullet: &str, job_title: &str, company: &str) -> PromptSpec {
    let mut user = String::new();
    if !job_title.is_empty() {
        user.push_str(&format!("Job Title: {job_title}\n"));
    }
    if !company.is_empty() {
        user.push_str(&format!("Company: {company}\n"));
    }
    user.push_str(&format!(
        "Original bullet point: {bullet}\n\nRewrite this bullet point:"
    ));
    PromptSpec::new(ENHANCE_BULLET_SYSTEM, user)
}

pub fn suggest_skills(
    job_title: &str,
    current_skills: &[String],
    experience_summary: &str,
) -> PromptSpec {
    PromptSpec::new(
        SUGGEST_SKILLS_SYSTEM,
        format!(
            "Job Title: {job_title}\nCurrent Skills: {}\nExperience: {experience_summary}\n\nSuggest missing skills as a JSON array:",
            compact(current_skills)
        ),
    )
}

pub fn portfolio_bio(name: &str, title: &str, skills: &[String], experience: &str) -> PromptSpec {
    PromptSpec::new(
        PORTFOLIO_BIO_SYSTEM,
        format!(
            "Name: {name}\nTitle: {title}\nSkills: {}\nExperience: {experience}\n\nGenerate tagline and bio as JSON:",
            compact(skills)
        ),
    )
}

/// An empty company name is addressed as "the company".
pub fn cover_letter(resume_content: &Value, job_description: &str, company_name: &str) -> PromptSpec {
    let company = if company_name.is_empty() {
        "the company"
    } else {
        company_name
    };
    PromptSpec::new(
        COVER_LETTER_SYSTEM,
        format!(
            "Resume:\n{}\n\nJob Description:\n{job_description}\n\nCompany: {company}\n\nWrite the cover letter:",
            pretty(resume_content)
        ),
    )
}

/// Strings render verbatim, other JSON values as compact JSON, null/absent as "".
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn pretty<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn compact(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_default()
}
