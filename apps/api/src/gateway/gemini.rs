use async_trait::async_trait;

use crate::gateway::prompts::{
    CANDIDATE_PROFILE_PROMPT, COVER_LETTER_PROMPT, JOB_RECOMMENDATION_PROMPT,
    SKILL_EXTRACTION_PROMPT,
};
use crate::gateway::{CandidateProfile, GatewayError, JobRecommendations, ModelGateway};
use crate::llm_client::prompts::{render, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError};

/// `ModelGateway` over the Gemini API.
pub struct GeminiGateway {
    llm: LlmClient,
}

impl GeminiGateway {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn extract_skills(&self, text: &str) -> Result<String, GatewayError> {
        let prompt = render(SKILL_EXTRACTION_PROMPT, &[("text", text)]);
        Ok(self.llm.call_text(&prompt).await?)
    }

    async fn recommend_jobs(
        &self,
        resume_skills: &str,
    ) -> Result<JobRecommendations, GatewayError> {
        let prompt = render(
            JOB_RECOMMENDATION_PROMPT,
            &[("skills", resume_skills), ("json_only", JSON_ONLY_INSTRUCTION)],
        );
        let recommendations: JobRecommendations = self.llm.call_json(&prompt).await?;
        if recommendations.is_empty() {
            return Err(LlmError::ContractViolation(
                "job recommendations contained no titles".to_string(),
            )
            .into());
        }
        Ok(recommendations)
    }

    async fn cover_letter(
        &self,
        resume_skills: &str,
        job_desc: &str,
    ) -> Result<String, GatewayError> {
        let prompt = render(
            COVER_LETTER_PROMPT,
            &[("skills", resume_skills), ("job_desc", job_desc)],
        );
        Ok(self.llm.call_text(&prompt).await?)
    }

    async fn candidate_profile(
        &self,
        resume_text: &str,
    ) -> Result<CandidateProfile, GatewayError> {
        let prompt = render(
            CANDIDATE_PROFILE_PROMPT,
            &[("text", resume_text), ("json_only", JSON_ONLY_INSTRUCTION)],
        );
        Ok(self.llm.call_json(&prompt).await?)
    }
}
