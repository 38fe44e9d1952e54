//! Model Gateway — the domain-level operations backed by the hosted model.
//!
//! Handlers only see `Arc<dyn ModelGateway>` from `AppState`. `GeminiGateway`
//! is installed when a credential is configured, `UnavailableGateway` otherwise,
//! and tests plug in their own fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::LlmError;

pub mod gemini;
pub mod prompts;

pub use gemini::GeminiGateway;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Model is not configured")]
    Unavailable,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Job titles suggested for a skill list, grouped by seniority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendations {
    #[serde(default)]
    pub junior: Vec<String>,
    #[serde(default)]
    pub mid: Vec<String>,
    #[serde(default)]
    pub senior: Vec<String>,
}

impl JobRecommendations {
    pub fn is_empty(&self) -> bool {
        self.junior.is_empty() && self.mid.is_empty() && self.senior.is_empty()
    }
}

/// Contact details and skills read out of one résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: Option<String>,
    /// Comma-separated, same format as `extract_skills` output.
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Whether calls can succeed at all (a credential is configured).
    fn is_available(&self) -> bool {
        true
    }

    /// Comma-separated technical skills mentioned in `text`.
    async fn extract_skills(&self, text: &str) -> Result<String, GatewayError>;

    async fn recommend_jobs(&self, resume_skills: &str)
        -> Result<JobRecommendations, GatewayError>;

    async fn cover_letter(&self, resume_skills: &str, job_desc: &str)
        -> Result<String, GatewayError>;

    async fn candidate_profile(&self, resume_text: &str)
        -> Result<CandidateProfile, GatewayError>;
}

/// Stand-in used when no API key is configured. Every call reports `Unavailable`.
pub struct UnavailableGateway;

#[async_trait]
impl ModelGateway for UnavailableGateway {
    fn is_available(&self) -> bool {
        false
    }

    async fn extract_skills(&self, _text: &str) -> Result<String, GatewayError> {
        Err(GatewayError::Unavailable)
    }

    async fn recommend_jobs(
        &self,
        _resume_skills: &str,
    ) -> Result<JobRecommendations, GatewayError> {
        Err(GatewayError::Unavailable)
    }

    async fn cover_letter(
        &self,
        _resume_skills: &str,
        _job_desc: &str,
    ) -> Result<String, GatewayError> {
        Err(GatewayError::Unavailable)
    }

    async fn candidate_profile(
        &self,
        _resume_text: &str,
    ) -> Result<CandidateProfile, GatewayError> {
        Err(GatewayError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_recommendations_missing_levels_default_empty() {
        let recs: JobRecommendations =
            serde_json::from_str(r#"{"junior": ["Junior Data Analyst"]}"#).unwrap();
        assert_eq!(recs.junior, vec!["Junior Data Analyst"]);
        assert!(recs.mid.is_empty());
        assert!(recs.senior.is_empty());
        assert!(!recs.is_empty());
    }

    #[test]
    fn test_job_recommendations_rejects_string_levels() {
        let result: Result<JobRecommendations, _> =
            serde_json::from_str(r#"{"junior": "Data Analyst"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_candidate_profile_accepts_nulls_and_missing_keys() {
        let profile: CandidateProfile =
            serde_json::from_str(r#"{"name": null, "skills": "rust, go"}"#).unwrap();
        assert_eq!(profile.name, None);
        assert_eq!(profile.skills.as_deref(), Some("rust, go"));
        assert_eq!(profile.email, None);
    }

    #[test]
    fn test_candidate_profile_rejects_skill_arrays() {
        let result: Result<CandidateProfile, _> =
            serde_json::from_str(r#"{"skills": ["rust", "go"]}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unavailable_gateway_refuses_everything() {
        let gateway = UnavailableGateway;
        assert!(!gateway.is_available());
        assert!(matches!(
            gateway.extract_skills("text").await,
            Err(GatewayError::Unavailable)
        ));
        assert!(matches!(
            gateway.recommend_jobs("rust").await,
            Err(GatewayError::Unavailable)
        ));
        assert!(matches!(
            gateway.cover_letter("rust", "jd").await,
            Err(GatewayError::Unavailable)
        ));
        assert!(matches!(
            gateway.candidate_profile("text").await,
            Err(GatewayError::Unavailable)
        ));
    }
}
