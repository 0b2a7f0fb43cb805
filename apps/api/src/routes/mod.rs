pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handle_extract_text;
use crate::responders::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/analyze-job", post(handlers::handle_analyze_job))
        .route("/api/check-resume", post(handlers::handle_check_resume))
        .route("/api/analyze-github", post(handlers::handle_analyze_github))
        .route(
            "/api/generate-interview",
            post(handlers::handle_generate_interview),
        )
        .route(
            "/api/generate-roadmap",
            post(handlers::handle_generate_roadmap),
        )
        .route("/api/career-chat", post(handlers::handle_career_chat))
        .route(
            "/api/extract-text",
            post(handle_extract_text).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::schema::Schema;
    use crate::config::Config;
    use crate::github_client::{GitHubError, GitHubProfile, GitHubRepo, GitHubUser, ProfileSource};
    use crate::responders::github::GitHubAnalysis;

    struct StubProfiles {
        available: bool,
    }

    #[async_trait]
    impl ProfileSource for StubProfiles {
        async fn fetch_profile(&self, username: &str) -> Result<GitHubProfile, GitHubError> {
            if !self.available {
                return Err(GitHubError::Api {
                    status: 404,
                    message: "Not Found".to_string(),
                });
            }
            Ok(GitHubProfile {
                user: GitHubUser {
                    login: username.to_string(),
                    public_repos: 24,
                    followers: 120,
                },
                repos: vec![
                    GitHubRepo {
                        name: "engine".to_string(),
                        language: Some("Rust".to_string()),
                        updated_at: Some(chrono::Utc::now()),
                    },
                    GitHubRepo {
                        name: "site".to_string(),
                        language: Some("TypeScript".to_string()),
                        updated_at: None,
                    },
                ],
            })
        }
    }

    fn app(available: bool) -> Router {
        let state = AppState::new(Config::default(), Arc::new(StubProfiles { available }));
        build_router(state)
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "compass-api");
    }

    #[tokio::test]
    async fn test_check_resume_without_text_is_client_error() {
        let (status, body) = post_json(app(true), "/api/check-resume", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body.get("categories").is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_client_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze-job")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_job() {
        let (status, body) = post_json(
            app(true),
            "/api/analyze-job",
            json!({
                "resume": "Python and AWS engineer. Strong communication.",
                "jobDescription": "Looking for Python, AWS and Kubernetes. Communication matters."
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["overallScore"].as_u64().unwrap() <= 100);
        assert!(body["missingSkills"]
            .as_array()
            .unwrap()
            .contains(&json!("Kubernetes")));
        assert!(body["matchLabel"].is_string());
    }

    #[tokio::test]
    async fn test_interview_react_non_senior() {
        let (status, body) = post_json(
            app(true),
            "/api/generate-interview",
            json!({
                "resume": "Frontend developer building React apps.",
                "jobDescription": "Join our team to build React interfaces."
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let questions = body["questions"].as_array().unwrap();
        assert!(questions.len() <= 12);

        let react: Vec<&Value> = questions
            .iter()
            .filter(|q| q["question"].as_str().unwrap().contains("React application"))
            .collect();
        assert_eq!(react.len(), 1);
        assert_eq!(react[0]["category"], "Technical");
        assert_eq!(react[0]["difficulty"], "Medium");

        let design: Vec<&Value> = questions
            .iter()
            .filter(|q| q["category"] == "System Design")
            .collect();
        assert_eq!(design.len(), 1);
        assert_eq!(design[0]["difficulty"], "Medium");
    }

    #[tokio::test]
    async fn test_github_uses_fetched_profile() {
        let (status, body) = post_json(
            app(true),
            "/api/analyze-github",
            json!({ "githubUrl": "https://github.com/octocat" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dataSource"], "github");
        assert_eq!(body["totalRepos"], 24);
        assert_eq!(body["primaryLanguages"][0]["name"], "Rust");
        // 60 + 12 + 12 + 2
        assert_eq!(body["strengthScore"], 86);
    }

    #[tokio::test]
    async fn test_github_falls_back_to_estimate() {
        let (status, body) = post_json(
            app(false),
            "/api/analyze-github",
            json!({ "githubUrl": "https://github.com/ghost" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dataSource"], "estimated");
        assert_eq!(body["primaryLanguages"].as_array().unwrap().len(), 5);

        let analysis: GitHubAnalysis = serde_json::from_value(body).unwrap();
        assert!(analysis.validate().is_ok());
    }

    #[tokio::test]
    async fn test_github_invalid_url() {
        let (status, body) = post_json(
            app(true),
            "/api/analyze-github",
            json!({ "githubUrl": "https://example.com/octocat" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid GitHub URL");
    }

    #[tokio::test]
    async fn test_roadmap_and_chat() {
        let (status, body) = post_json(
            app(true),
            "/api/generate-roadmap",
            json!({ "companyName": "Google" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company"], "Google");
        assert_eq!(body["weeklyPlan"].as_array().unwrap().len(), 5);

        let (status, body) = post_json(
            app(true),
            "/api/career-chat",
            json!({ "messages": [{ "role": "user", "content": "How should I negotiate salary?" }] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["content"]
            .as_str()
            .unwrap()
            .starts_with("Salary negotiation"));

        let (status, _) = post_json(app(true), "/api/career-chat", json!({ "messages": [] })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    fn multipart_upload(file_name: &str, content_type: &str, content: &[u8]) -> Request<Body> {
        let boundary = "X-BOUNDARY";
        let mut body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/extract-text")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_extract_text_rejects_legacy_doc() {
        let request = multipart_upload("cv.doc", "application/msword", b"\xd0\xcf\x11\xe0");
        let response = app(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("save as DOCX"));
    }

    #[tokio::test]
    async fn test_extract_text_reads_docx() {
        let docx = crate::extraction::docx_fixture(
            "<w:document><w:body><w:p><w:r><w:t>Jane Doe, Rust engineer</w:t></w:r></w:p></w:body></w:document>",
        );
        let request = multipart_upload(
            "cv.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            &docx,
        );
        let response = app(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["fileName"], "cv.docx");
        assert_eq!(body["text"], "Jane Doe, Rust engineer");
    }

    #[tokio::test]
    async fn test_extract_text_broken_docx_is_unprocessable() {
        let request = multipart_upload(
            "cv.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            b"PK",
        );
        let response = app(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_extract_text_reads_plain_text() {
        let boundary = "X-BOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"cv.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             Jane Doe, Rust engineer\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/extract-text")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["fileName"], "cv.txt");
        assert_eq!(body["text"], "Jane Doe, Rust engineer");
        assert_eq!(body["characters"], 23);
    }
}
