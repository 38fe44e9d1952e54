use serde::Serialize;

use crate::matching::skill_set::SkillSet;

pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";
pub const NOT_AVAILABLE: &str = "N/A";

/// One ranked résumé in recruiter mode.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub match_percentage: u8,
    pub missing_skills: SkillSet,
    pub pdf_name: String,
    /// Base64 PNG pie of matched vs missing share.
    pub pie_chart: String,
    /// Name exactly as the model reported it; `None` when it gave none.
    #[serde(skip)]
    pub reported_name: Option<String>,
}

/// Sorts by match percentage, highest first. Ties keep upload order.
pub fn rank_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    // slice::sort_by is stable
    candidates.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    candidates
}

/// Bar-chart label: the reported name, else the file name before its first dot.
pub fn chart_label(candidate: &Candidate) -> String {
    match candidate.reported_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => candidate
            .pdf_name
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}
