//! Recruiter mode — scores many résumés against one job skill list.
//!
//! Flow per file, in upload order: PDF text → candidate profile (model) →
//! match against job skills → pie chart. A file whose text or profile cannot be
//! extracted is skipped; the rest of the batch carries on. Chart failures are
//! request failures.

use serde::Serialize;
use tracing::{debug, warn};

use crate::analysis::form::UploadedFile;
use crate::charts::{render_bar_chart, render_pie_chart};
use crate::errors::AppError;
use crate::gateway::CandidateProfile;
use crate::matching::ranking::{NOT_AVAILABLE, UNKNOWN_CANDIDATE};
use crate::matching::{chart_label, match_skills, rank_candidates, Candidate, SkillSet};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecruiterReport {
    pub candidates: Vec<Candidate>,
    /// Base64 PNG comparing all candidates.
    pub bar_chart: String,
}

pub async fn evaluate_resumes(
    state: &AppState,
    resumes: Vec<UploadedFile>,
    job_skills: &str,
) -> Result<RecruiterReport, AppError> {
    let mut candidates = Vec::with_capacity(resumes.len());
    for upload in resumes {
        if let Some(candidate) = evaluate_resume(state, upload, job_skills).await? {
            candidates.push(candidate);
        }
    }

    let candidates = rank_candidates(candidates);
    let labels = candidates.iter().map(chart_label).collect();
    let scores = candidates.iter().map(|c| c.match_percentage).collect();
    let bar_chart = render_bar_chart(labels, scores).await?;

    Ok(RecruiterReport {
        candidates,
        bar_chart,
    })
}

/// `Ok(None)` means the file was skipped.
async fn evaluate_resume(
    state: &AppState,
    upload: UploadedFile,
    job_skills: &str,
) -> Result<Option<Candidate>, AppError> {
    let UploadedFile { file_name, data } = upload;

    let text = match state.extractor.extract(data).await {
        Ok(text) => text,
        Err(e) => {
            warn!(file = %file_name, "Skipping resume, PDF extraction failed: {e}");
            return Ok(None);
        }
    };

    let profile = match state.gateway.candidate_profile(&text).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!(file = %file_name, "Skipping resume, profile extraction failed: {e}");
            return Ok(None);
        }
    };

    let result = match_skills(profile.skills.as_deref().unwrap_or_default(), job_skills);
    debug!(file = %file_name, match_percentage = result.match_percentage, "Resume scored");

    let pie_chart = render_pie_chart(result.match_percentage).await?;

    Ok(Some(build_candidate(
        profile,
        file_name,
        result.match_percentage,
        result.missing_skills,
        pie_chart,
    )))
}

fn build_candidate(
    profile: CandidateProfile,
    pdf_name: String,
    match_percentage: u8,
    missing_skills: SkillSet,
    pie_chart: String,
) -> Candidate {
    let reported_name = filled(profile.name);
    Candidate {
        name: reported_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string()),
        email: filled(profile.email).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        phone: filled(profile.phone).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        match_percentage,
        missing_skills,
        pdf_name,
        pie_chart,
        reported_name,
    }
}

fn filled(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
