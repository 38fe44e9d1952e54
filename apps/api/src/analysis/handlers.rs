//! Axum route handlers for the analysis API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::form::UploadForm;
use crate::analysis::recruiter::{evaluate_resumes, RecruiterReport};
use crate::errors::AppError;
use crate::gateway::{GatewayError, JobRecommendations};
use crate::matching::{match_skills, SkillSet};
use crate::state::AppState;

pub const COVER_LETTER_UNAVAILABLE: &str =
    "Cover letter generation is currently unavailable. Please check your API key.";
pub const COVER_LETTER_FAILED: &str = "Cover letter generation failed due to an API error.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub match_percentage: u8,
    pub missing_skills: SkillSet,
    pub recommended_jobs: JobRecommendations,
    /// Raw model output, as shown to the user and fed back for cover letters.
    pub resume_skills: String,
    pub job_skills: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub resume_skills: Option<String>,
    #[serde(default)]
    pub job_desc: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Multipart `resume` (PDF) + `job_desc`. Extracts skills from both, scores
/// coverage and asks the model for job titles matching the résumé.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let (Some(resume), Some(job_desc)) = (form.take_file("resume"), form.text("job_desc")) else {
        return Err(AppError::BadRequest(
            "No file or job description provided.".to_string(),
        ));
    };

    info!(file = %resume.file_name, bytes = resume.data.len(), "Analyzing resume");

    let resume_text = state.extractor.extract(resume.data).await.map_err(|e| {
        warn!(file = %resume.file_name, "PDF extraction failed: {e}");
        AppError::PdfExtraction("Failed to extract text from PDF.".to_string())
    })?;

    let skills_failed = |e: GatewayError| {
        warn!("Skill extraction failed: {e}");
        AppError::Llm("Failed to extract skills from text.".to_string())
    };
    let resume_skills = state
        .gateway
        .extract_skills(&resume_text)
        .await
        .map_err(skills_failed)?;
    let job_skills = state
        .gateway
        .extract_skills(job_desc)
        .await
        .map_err(skills_failed)?;

    let result = match_skills(&resume_skills, &job_skills);

    let recommended_jobs = state
        .gateway
        .recommend_jobs(&resume_skills)
        .await
        .map_err(|e| {
            warn!("Job recommendation failed: {e}");
            AppError::Llm("Failed to get job recommendations from AI.".to_string())
        })?;

    info!(
        match_percentage = result.match_percentage,
        missing = result.missing_skills.len(),
        "Resume analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        match_percentage: result.match_percentage,
        missing_skills: result.missing_skills,
        recommended_jobs,
        resume_skills,
        job_skills,
    }))
}

/// POST /generate-cover-letter
///
/// Model failures are not errors here: the letter text becomes a notice instead.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    payload: Result<Json<CoverLetterRequest>, JsonRejection>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let request = payload.map(|Json(r)| r).unwrap_or_default();
    let (Some(resume_skills), Some(job_desc)) = (
        non_blank(request.resume_skills.as_deref()),
        non_blank(request.job_desc.as_deref()),
    ) else {
        return Err(AppError::BadRequest(
            "Resume skills or job description not provided.".to_string(),
        ));
    };

    let cover_letter = match state.gateway.cover_letter(resume_skills, job_desc).await {
        Ok(letter) => letter,
        Err(GatewayError::Unavailable) => COVER_LETTER_UNAVAILABLE.to_string(),
        Err(e) => {
            warn!("Cover letter generation failed: {e}");
            COVER_LETTER_FAILED.to_string()
        }
    };

    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// POST /analyze-recruiter
///
/// Multipart `resumes[]` (one or more PDFs) + `job_desc`. Returns candidates
/// ranked by match percentage and a comparison bar chart.
pub async fn handle_analyze_recruiter(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RecruiterReport>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let resumes = form.take_files(&["resumes[]", "resumes"]);
    let job_desc = match form.text("job_desc") {
        Some(text) if !resumes.is_empty() => text,
        _ => {
            return Err(AppError::BadRequest(
                "No resumes or job description provided.".to_string(),
            ))
        }
    };

    info!(files = resumes.len(), "Analyzing resumes in recruiter mode");

    let job_skills = state.gateway.extract_skills(job_desc).await.map_err(|e| {
        warn!("Job skill extraction failed: {e}");
        AppError::Llm("Failed to extract skills from job description.".to_string())
    })?;

    let report = evaluate_resumes(&state, resumes, &job_skills).await?;
    Ok(Json(report))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
