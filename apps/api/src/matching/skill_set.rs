//! Skill Set Matcher — normalizes comma-separated skill lists and measures how
//! much of a job's required skill set a résumé covers.
//!
//! The score is asymmetric: `|resume ∩ job| / |job| × 100`, floored. An empty job
//! set scores 0 regardless of the résumé, and the UI relies on always receiving
//! a number.

use std::collections::BTreeSet;

use serde::Serialize;

/// A normalized set of skill tokens (trimmed, lower-cased, non-empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Splits on commas, trims, lower-cases and drops empty tokens.
    /// Comma-only or blank input yields an empty set.
    pub fn parse(text: &str) -> Self {
        SkillSet(
            text.split(',')
                .map(|token| token.trim().to_lowercase())
                .filter(|token| !token.is_empty())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of tokens present in both sets.
    pub fn overlap(&self, other: &SkillSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Tokens in `self` that `other` lacks (`self − other`).
    pub fn missing_from(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.difference(&other.0).cloned().collect())
    }
}

/// Result of matching a résumé skill list against a job skill list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub match_percentage: u8,
    pub missing_skills: SkillSet,
}

/// Coverage percentage of `job` by `resume`, floored. 0 when either side is empty.
fn coverage(resume: &SkillSet, job: &SkillSet) -> u8 {
    if resume.is_empty() || job.is_empty() {
        return 0;
    }
    // Integer division floors; overlap <= job.len() keeps this within 0..=100.
    (resume.overlap(job) * 100 / job.len()) as u8
}

/// Scores two raw comma-separated skill strings.
pub fn score(resume_skills: &str, job_skills: &str) -> u8 {
    coverage(&SkillSet::parse(resume_skills), &SkillSet::parse(job_skills))
}

/// Computes both the match percentage and the job skills the résumé lacks.
pub fn match_skills(resume_skills: &str, job_skills: &str) -> MatchResult {
    let resume = SkillSet::parse(resume_skills);
    let job = SkillSet::parse(job_skills);
    MatchResult {
        match_percentage: coverage(&resume, &job),
        missing_skills: job.missing_from(&resume),
    }
}
