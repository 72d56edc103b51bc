pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::auth::handlers as auth;
use crate::documents::handlers as documents;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        // Manual resume records
        .route("/resume", post(resumes::handle_create_resume))
        .route("/resumes", get(resumes::handle_list_resumes))
        // Documents
        .route("/upload", post(documents::handle_upload))
        .route("/generate-pdf", post(documents::handle_generate_pdf))
        .route("/generate-docx", post(documents::handle_generate_docx))
        // Analysis
        .route("/ats-score", post(analysis::handle_ats_score))
        .route("/ai-enhance", post(analysis::handle_enhance))
        // Accounts
        .route("/signup", post(auth::handle_signup))
        .route("/login", post(auth::handle_login))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::auth::store::InMemoryAccountStore;
    use crate::auth::token::TokenIssuer;
    use crate::documents::generate::write_docx;
    use crate::documents::storage::HoldingAreas;
    use crate::llm_client::tests::spawn_fake_llm;
    use crate::llm_client::LlmClient;
    use crate::resumes::store::InMemoryResumeStore;

    const SECRET: &str = "test-secret";
    const BOUNDARY: &str = "XBOUNDARYX";

    struct TestApp {
        router: Router,
        holding: HoldingAreas,
        _dir: TempDir,
    }

    async fn test_app_with_llm(llm_base_url: String) -> TestApp {
        let dir = tempfile::tempdir().unwrap();
        let holding = HoldingAreas::new(dir.path().join("uploads"), dir.path().join("generated"));
        holding.ensure().await.unwrap();

        let state = AppState {
            resumes: Arc::new(InMemoryResumeStore::default()),
            accounts: Arc::new(InMemoryAccountStore::default()),
            llm: LlmClient::new("k".into(), llm_base_url, Duration::from_secs(5)).unwrap(),
            tokens: TokenIssuer::new(SECRET, 30),
            holding: holding.clone(),
            bcrypt_cost: 4,
        };

        TestApp {
            router: build_router(state, 1024 * 1024),
            holding,
            _dir: dir,
        }
    }

    async fn test_app() -> TestApp {
        // Never contacted by tests that use this helper.
        test_app_with_llm("http://127.0.0.1:9".into()).await
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_upload(field: &str, filename: &str, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_liveness_probe() {
        let app = test_app().await;
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let (status, body) = send(&app.router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Backend is running");
    }

    #[tokio::test]
    async fn test_ats_score_endpoint() {
        let app = test_app().await;
        let (status, body) = send(
            &app.router,
            post_json(
                "/ats-score",
                json!({
                    "resume_text": "Experienced in python and sql development",
                    "job_keywords": ["Python", "SQL", "Go"]
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"matched_keywords": 2, "total_keywords": 3, "score": 66})
        );
    }

    #[tokio::test]
    async fn test_ats_score_missing_fields_default_to_zero() {
        let app = test_app().await;
        let (status, body) = send(&app.router, post_json("/ats-score", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"score": 0}));
    }

    #[tokio::test]
    async fn test_ats_score_empty_resume_body_is_score_only() {
        let app = test_app().await;
        let (status, body) = send(
            &app.router,
            post_json(
                "/ats-score",
                json!({"resume_text": "", "job_keywords": ["a", "b"]}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"score": 0}));
    }

    #[tokio::test]
    async fn test_resume_create_then_list() {
        let app = test_app().await;
        for name in ["Ada", "Grace"] {
            let (status, body) = send(
                &app.router,
                post_json(
                    "/resume",
                    json!({
                        "name": name,
                        "email": format!("{name}@example.com"),
                        "skills": "Rust",
                        "experience": "5 years"
                    }),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert!(body["id"].is_i64());
        }

        let request = Request::builder().uri("/resumes").body(Body::empty()).unwrap();
        let (status, body) = send(&app.router, request).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }

    #[tokio::test]
    async fn test_resume_missing_field_is_rejected() {
        let app = test_app().await;
        let (status, _) = send(
            &app.router,
            post_json("/resume", json!({"name": "Ada", "email": "ada@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_signup_login_flow() {
        let app = test_app().await;
        let creds = json!({"email": "ada@example.com", "password": "pw"});

        let (status, body) = send(&app.router, post_json("/signup", creds.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Signup successful");

        let (status, body) = send(
            &app.router,
            post_json("/signup", json!({"email": "ada@example.com", "password": "other"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");

        let (status, body) = send(
            &app.router,
            post_json("/login", json!({"email": "ada@example.com", "password": "other"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.get("error").is_some());

        let (status, body) = send(&app.router, post_json("/login", creds)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "bearer");
        let token = body["access_token"].as_str().unwrap();
        let claims = TokenIssuer::new(SECRET, 30).decode(token).unwrap();
        assert_eq!(claims.sub, "ada@example.com");
    }

    #[tokio::test]
    async fn test_upload_docx_extracts_text_under_fresh_name() {
        let app = test_app().await;
        let source = tempfile::tempdir().unwrap();
        let docx_path = source.path().join("cv.docx");
        write_docx("Jane Doe\nRust engineer", &docx_path).unwrap();
        let data = std::fs::read(&docx_path).unwrap();

        let (status, body) = send(&app.router, multipart_upload("file", "cv.docx", &data)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "cv.docx");
        assert_eq!(body["extracted_text"], "Jane Doe\nRust engineer");

        let stored: Vec<_> = std::fs::read_dir(&app.holding.uploads)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(stored.len(), 1);
        assert_ne!(stored[0], "cv.docx");
        assert!(stored[0].ends_with(".docx"));
    }

    #[tokio::test]
    async fn test_upload_unsupported_format_yields_empty_text() {
        let app = test_app().await;
        let (status, body) =
            send(&app.router, multipart_upload("file", "notes.txt", b"python sql")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "notes.txt");
        assert_eq!(body["extracted_text"], "");
    }

    #[tokio::test]
    async fn test_upload_truncates_preview() {
        let app = test_app().await;
        let source = tempfile::tempdir().unwrap();
        let docx_path = source.path().join("long.docx");
        write_docx(&"x".repeat(3000), &docx_path).unwrap();
        let data = std::fs::read(&docx_path).unwrap();

        let (_, body) = send(&app.router, multipart_upload("file", "long.docx", &data)).await;
        assert_eq!(body["extracted_text"].as_str().unwrap().chars().count(), 2000);
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_bad_request() {
        let app = test_app().await;
        let (status, body) =
            send(&app.router, multipart_upload("attachment", "cv.pdf", b"%PDF")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_docx_returns_path_in_generated_area() {
        let app = test_app().await;
        let (status, body) = send(
            &app.router,
            post_json("/generate-docx", json!({"resume_text": "a\n\nb"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let path = std::path::PathBuf::from(body["docx_file"].as_str().unwrap());
        assert!(path.starts_with(&app.holding.generated));
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn test_generate_pdf_with_missing_text_still_writes_file() {
        let app = test_app().await;
        let (status, body) = send(&app.router, post_json("/generate-pdf", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        let path = std::path::PathBuf::from(body["pdf_file"].as_str().unwrap());
        assert!(path.is_file());
        assert_eq!(path.extension().unwrap(), "pdf");
    }

    #[tokio::test]
    async fn test_ai_enhance_returns_model_text() {
        let base = spawn_fake_llm(
            StatusCode::OK,
            json!({"choices": [{"message": {"content": "Polished resume"}}]}),
        )
        .await;
        let app = test_app_with_llm(base).await;

        let (status, body) = send(
            &app.router,
            post_json(
                "/ai-enhance",
                json!({"resume_text": "raw", "target_role": "Engineer"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["enhanced_resume"], "Polished resume");
    }

    #[tokio::test]
    async fn test_ai_enhance_upstream_failure_is_bad_gateway() {
        let base = spawn_fake_llm(StatusCode::SERVICE_UNAVAILABLE, json!({})).await;
        let app = test_app_with_llm(base).await;

        let (status, body) = send(&app.router, post_json("/ai-enhance", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }
}
