pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .route(
            "/generate-cover-letter",
            post(handlers::handle_generate_cover_letter),
        )
        .route("/analyze-recruiter", post(handlers::handle_analyze_recruiter))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use base64::{engine::general_purpose::STANDARD, Engine};
    use bytes::Bytes;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::handlers::{COVER_LETTER_FAILED, COVER_LETTER_UNAVAILABLE};
    use crate::config::{Config, DEFAULT_MODEL};
    use crate::gateway::{
        CandidateProfile, GatewayError, JobRecommendations, ModelGateway, UnavailableGateway,
    };
    use crate::llm_client::LlmError;
    use crate::pdf::{require_text, PdfError, TextExtractor};

    const BOUNDARY: &str = "skillmatch-test-boundary";

    /// Treats upload bytes as UTF-8 text; anything starting with `%CORRUPT` fails.
    struct FakeExtractor;

    #[async_trait]
    impl TextExtractor for FakeExtractor {
        async fn extract(&self, data: Bytes) -> Result<String, PdfError> {
            let text = String::from_utf8_lossy(&data).to_string();
            if text.starts_with("%CORRUPT") {
                return Err(PdfError::Parse("corrupt test file".to_string()));
            }
            require_text(text)
        }
    }

    /// Answers from lookup tables keyed by the exact input text.
    #[derive(Default)]
    struct FakeGateway {
        skills: HashMap<String, String>,
        profiles: HashMap<String, CandidateProfile>,
        jobs: Option<JobRecommendations>,
        letter: Option<String>,
    }

    fn contract_violation() -> GatewayError {
        GatewayError::Llm(LlmError::ContractViolation("fake".to_string()))
    }

    #[async_trait]
    impl ModelGateway for FakeGateway {
        async fn extract_skills(&self, text: &str) -> Result<String, GatewayError> {
            self.skills.get(text).cloned().ok_or(GatewayError::Llm(LlmError::EmptyContent))
        }

        async fn recommend_jobs(&self, _skills: &str) -> Result<JobRecommendations, GatewayError> {
            self.jobs.clone().ok_or_else(contract_violation)
        }

        async fn cover_letter(&self, skills: &str, job_desc: &str) -> Result<String, GatewayError> {
            self.letter
                .as_ref()
                .map(|l| format!("{l} [{skills}] [{job_desc}]"))
                .ok_or_else(contract_violation)
        }

        async fn candidate_profile(&self, text: &str) -> Result<CandidateProfile, GatewayError> {
            self.profiles.get(text).cloned().ok_or_else(contract_violation)
        }
    }

    fn test_config() -> Config {
        Config {
            google_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            llm_timeout_secs: 5,
            max_upload_bytes: 1024 * 1024,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn app(gateway: impl ModelGateway + 'static) -> Router {
        build_router(AppState {
            gateway: Arc::new(gateway),
            extractor: Arc::new(FakeExtractor),
            config: test_config(),
        })
    }

    const JOB_DESC: &str = "Backend engineer: Python, Docker and AWS";

    fn profile(name: &str, skills: &str) -> CandidateProfile {
        CandidateProfile {
            name: Some(name.to_string()),
            skills: Some(skills.to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            phone: None,
        }
    }

    fn recruiter_gateway() -> FakeGateway {
        let mut gateway = FakeGateway::default();
        gateway
            .skills
            .insert(JOB_DESC.to_string(), "python, docker, aws".to_string());
        gateway
            .profiles
            .insert("ALICE RESUME".to_string(), profile("Alice", "Python, AWS"));
        gateway
            .profiles
            .insert("BOB RESUME".to_string(), profile("Bob", "docker"));
        gateway
            .profiles
            .insert("CAROL RESUME".to_string(), profile("Carol", "aws, python"));
        gateway
    }

    fn analyze_gateway() -> FakeGateway {
        let mut gateway = FakeGateway::default();
        gateway
            .skills
            .insert("Jane Doe - Python, SQL".to_string(), "Python, SQL".to_string());
        gateway
            .skills
            .insert(JOB_DESC.to_string(), "python, docker, aws".to_string());
        gateway.jobs = Some(JobRecommendations {
            junior: vec!["Junior Backend Developer".to_string()],
            mid: vec!["Backend Engineer".to_string()],
            senior: vec![],
        });
        gateway
    }

    enum Part<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, &'a str),
    }

    fn multipart_request(uri: &str, parts: &[Part]) -> Request<Body> {
        let mut body = String::new();
        for part in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match part {
                Part::Text(name, value) => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                    ));
                }
                Part::File(name, file_name, content) => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/pdf\r\n\r\n{content}\r\n"
                    ));
                }
            }
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn is_png_base64(value: &Value) -> bool {
        value
            .as_str()
            .and_then(|s| STANDARD.decode(s).ok())
            .map(|bytes| bytes.starts_with(b"\x89PNG\r\n\x1a\n"))
            .unwrap_or(false)
    }

    // ── GET / and /health ───────────────────────────────────────────────────

    #[tokio::test]
    async fn test_index_serves_html() {
        let response = app(FakeGateway::default())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_health_reports_model_availability() {
        let request = || Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(UnavailableGateway), request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["model_available"], false);

        let (_, body) = send(app(FakeGateway::default()), request()).await;
        assert_eq!(body["model_available"], true);
    }

    // ── POST /analyze ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_analyze_happy_path() {
        let request = multipart_request(
            "/analyze",
            &[
                Part::File("resume", "jane.pdf", "Jane Doe - Python, SQL"),
                Part::Text("job_desc", JOB_DESC),
            ],
        );
        let (status, body) = send(app(analyze_gateway()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_percentage"], 33);
        assert_eq!(body["missing_skills"], serde_json::json!(["aws", "docker"]));
        assert_eq!(body["resume_skills"], "Python, SQL");
        assert_eq!(body["job_skills"], "python, docker, aws");
        assert_eq!(body["recommended_jobs"]["mid"][0], "Backend Engineer");
        assert_eq!(body["recommended_jobs"]["senior"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_analyze_missing_fields_is_400() {
        let request = multipart_request("/analyze", &[Part::Text("job_desc", JOB_DESC)]);
        let (status, body) = send(app(analyze_gateway()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No file or job description provided.");

        let request = multipart_request(
            "/analyze",
            &[Part::File("resume", "jane.pdf", "Jane Doe - Python, SQL")],
        );
        let (status, _) = send(app(analyze_gateway()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_unreadable_pdf_is_500() {
        let request = multipart_request(
            "/analyze",
            &[
                Part::File("resume", "broken.pdf", "%CORRUPT"),
                Part::Text("job_desc", JOB_DESC),
            ],
        );
        let (status, body) = send(app(analyze_gateway()), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to extract text from PDF.");
    }

    #[tokio::test]
    async fn test_analyze_skill_extraction_failure_is_500() {
        let request = multipart_request(
            "/analyze",
            &[
                Part::File("resume", "unknown.pdf", "someone the fake has never seen"),
                Part::Text("job_desc", JOB_DESC),
            ],
        );
        let (status, body) = send(app(analyze_gateway()), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to extract skills from text.");
    }

    #[tokio::test]
    async fn test_analyze_recommendation_failure_is_500() {
        let mut gateway = analyze_gateway();
        gateway.jobs = None;
        let request = multipart_request(
            "/analyze",
            &[
                Part::File("resume", "jane.pdf", "Jane Doe - Python, SQL"),
                Part::Text("job_desc", JOB_DESC),
            ],
        );
        let (status, body) = send(app(gateway), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to get job recommendations from AI.");
    }

    #[tokio::test]
    async fn test_analyze_without_model_is_500_not_crash() {
        let request = multipart_request(
            "/analyze",
            &[
                Part::File("resume", "jane.pdf", "Jane Doe - Python, SQL"),
                Part::Text("job_desc", JOB_DESC),
            ],
        );
        let (status, body) = send(app(UnavailableGateway), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to extract skills from text.");
    }

    // ── POST /generate-cover-letter ─────────────────────────────────────────

    #[tokio::test]
    async fn test_cover_letter_happy_path() {
        let gateway = FakeGateway {
            letter: Some("Dear team".to_string()),
            ..Default::default()
        };
        let request = json_request(
            "/generate-cover-letter",
            serde_json::json!({"resume_skills": "rust", "job_desc": "Rust dev"}),
        );
        let (status, body) = send(app(gateway), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cover_letter"], "Dear team [rust] [Rust dev]");
    }

    #[tokio::test]
    async fn test_cover_letter_missing_field_is_400() {
        let request = json_request(
            "/generate-cover-letter",
            serde_json::json!({"resume_skills": "rust"}),
        );
        let (status, body) = send(app(FakeGateway::default()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Resume skills or job description not provided.");
    }

    #[tokio::test]
    async fn test_cover_letter_non_json_body_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/generate-cover-letter")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("hello"))
            .unwrap();
        let (status, _) = send(app(FakeGateway::default()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cover_letter_fallback_messages() {
        let body = serde_json::json!({"resume_skills": "rust", "job_desc": "Rust dev"});

        let (status, json) = send(
            app(UnavailableGateway),
            json_request("/generate-cover-letter", body.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["cover_letter"], COVER_LETTER_UNAVAILABLE);

        let (status, json) = send(
            app(FakeGateway::default()),
            json_request("/generate-cover-letter", body),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["cover_letter"], COVER_LETTER_FAILED);
    }

    // ── POST /analyze-recruiter ─────────────────────────────────────────────

    #[tokio::test]
    async fn test_recruiter_ranks_candidates() {
        let request = multipart_request(
            "/analyze-recruiter",
            &[
                Part::Text("job_desc", JOB_DESC),
                Part::File("resumes[]", "alice.pdf", "ALICE RESUME"),
                Part::File("resumes[]", "bob.pdf", "BOB RESUME"),
            ],
        );
        let (status, body) = send(app(recruiter_gateway()), request).await;
        assert_eq!(status, StatusCode::OK);

        let candidates = body["candidates"].as_array().unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0]["pdf_name"], "alice.pdf");
        assert_eq!(candidates[0]["match_percentage"], 66);
        assert_eq!(candidates[0]["missing_skills"], serde_json::json!(["docker"]));
        assert_eq!(candidates[0]["email"], "alice@example.com");
        assert_eq!(candidates[0]["phone"], "N/A");
        assert_eq!(candidates[1]["pdf_name"], "bob.pdf");
        assert_eq!(candidates[1]["match_percentage"], 33);
        assert!(is_png_base64(&candidates[0]["pie_chart"]));
        assert!(is_png_base64(&body["bar_chart"]));
    }

    #[tokio::test]
    async fn test_recruiter_sorts_and_keeps_ties_in_upload_order() {
        let request = multipart_request(
            "/analyze-recruiter",
            &[
                Part::Text("job_desc", JOB_DESC),
                Part::File("resumes[]", "bob.pdf", "BOB RESUME"),
                Part::File("resumes[]", "carol.pdf", "CAROL RESUME"),
                Part::File("resumes[]", "alice.pdf", "ALICE RESUME"),
            ],
        );
        let (_, body) = send(app(recruiter_gateway()), request).await;
        let order: Vec<_> = body["candidates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(order, vec!["Carol", "Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_recruiter_skips_unusable_files() {
        let request = multipart_request(
            "/analyze-recruiter",
            &[
                Part::Text("job_desc", JOB_DESC),
                Part::File("resumes[]", "broken.pdf", "%CORRUPT"),
                Part::File("resumes[]", "stranger.pdf", "NOBODY KNOWS ME"),
                Part::File("resumes[]", "bob.pdf", "BOB RESUME"),
            ],
        );
        let (status, body) = send(app(recruiter_gateway()), request).await;
        assert_eq!(status, StatusCode::OK);
        let candidates = body["candidates"].as_array().unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0]["name"], "Bob");
    }

    #[tokio::test]
    async fn test_recruiter_all_skipped_still_returns_chart() {
        let request = multipart_request(
            "/analyze-recruiter",
            &[
                Part::Text("job_desc", JOB_DESC),
                Part::File("resumes[]", "broken.pdf", "%CORRUPT"),
            ],
        );
        let (status, body) = send(app(recruiter_gateway()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["candidates"].as_array().unwrap().is_empty());
        assert!(is_png_base64(&body["bar_chart"]));
    }

    #[tokio::test]
    async fn test_recruiter_missing_fields_is_400() {
        let request = multipart_request(
            "/analyze-recruiter",
            &[Part::Text("job_desc", JOB_DESC)],
        );
        let (status, body) = send(app(recruiter_gateway()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No resumes or job description provided.");
    }

    #[tokio::test]
    async fn test_recruiter_job_skill_failure_is_500() {
        let request = multipart_request(
            "/analyze-recruiter",
            &[
                Part::Text("job_desc", "a job description the fake does not know"),
                Part::File("resumes[]", "bob.pdf", "BOB RESUME"),
            ],
        );
        let (status, body) = send(app(recruiter_gateway()), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to extract skills from job description.");
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_rejected() {
        let big = "x".repeat(2 * 1024 * 1024);
        let request = multipart_request(
            "/analyze",
            &[
                Part::File("resume", "huge.pdf", &big),
                Part::Text("job_desc", JOB_DESC),
            ],
        );
        let response = app(analyze_gateway()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
