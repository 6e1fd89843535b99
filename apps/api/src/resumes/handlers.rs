use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::resumes::storage::resume_key;
use crate::state::AppState;

const PDF_CONTENT_TYPE: &str = "application/pdf";
const FILE_FIELD: &str = "file";

/// Largest accepted request body for resume uploads.
pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResumeResponse {
    pub success: bool,
    pub resume_key: String,
}

/// POST /api/v1/resumes
///
/// Stores the `file` field of a multipart body verbatim. PDF only.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let mut multipart = multipart?;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        if field.content_type() != Some(PDF_CONTENT_TYPE) {
            return Err(AppError::Validation("Please upload a PDF file".to_string()));
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        let key = resume_key(&user.id, &file_name, Utc::now());
        state.resumes.put(&key, data, PDF_CONTENT_TYPE).await?;
        info!("Stored resume {} for user {}", key, user.id);

        return Ok(Json(UploadResumeResponse {
            success: true,
            resume_key: key,
        }));
    }

    Err(AppError::Validation("Please upload your resume".to_string()))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::routes::build_router;
    use crate::test_support::{questions_json, ScriptedGenerator, TestHarness};

    const BOUNDARY: &str = "X-RESUME-BOUNDARY";

    fn multipart_body(content_type: &str, file_name: &str, data: &str) -> String {
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {data}\r\n\
             --{BOUNDARY}--\r\n"
        )
    }

    async fn upload(harness: &TestHarness, token: Option<&str>, body: String) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/resumes")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = build_router(harness.state())
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn harness() -> TestHarness {
        TestHarness::new(ScriptedGenerator::replying(questions_json(5)))
    }

    #[tokio::test]
    async fn test_pdf_upload_is_stored_under_user_prefix() {
        let harness = harness();
        let token = harness.sign_in("u1");

        let body = multipart_body("application/pdf", "cv.pdf", "%PDF-1.4 fake");
        let (status, response) = upload(&harness, Some(&token), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["success"], true);
        let key = response["resumeKey"].as_str().unwrap();
        assert!(key.starts_with("resumes/u1/"));
        assert!(key.ends_with("_cv.pdf"));

        let stored = harness.resumes.object(key).unwrap();
        assert_eq!(&stored[..], b"%PDF-1.4 fake");
    }

    #[tokio::test]
    async fn test_non_pdf_is_rejected() {
        let harness = harness();
        let token = harness.sign_in("u1");

        let body = multipart_body("text/plain", "cv.txt", "plain text");
        let (status, response) = upload(&harness, Some(&token), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "Please upload a PDF file");
        assert!(harness.resumes.is_empty());
    }

    #[tokio::test]
    async fn test_upload_requires_session() {
        let harness = harness();
        let body = multipart_body("application/pdf", "cv.pdf", "%PDF");

        let (status, _) = upload(&harness, None, body).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_body_without_file_field_is_rejected() {
        let harness = harness();
        let token = harness.sign_in("u1");

        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"note\"\r\n\r\n\
             see attached\r\n\
             --{BOUNDARY}--\r\n"
        );
        let (status, response) = upload(&harness, Some(&token), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["success"], false);
        assert_eq!(response["error"], "Please upload your resume");
        assert!(harness.resumes.is_empty());
    }

    #[tokio::test]
    async fn test_empty_pdf_is_rejected() {
        let harness = harness();
        let token = harness.sign_in("u1");

        let body = multipart_body("application/pdf", "cv.pdf", "");
        let (status, response) = upload(&harness, Some(&token), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["success"], false);
        assert_eq!(response["error"], "Uploaded file is empty");
        assert!(harness.resumes.is_empty());
    }

    #[tokio::test]
    async fn test_non_multipart_request_is_json_400() {
        let harness = harness();
        let token = harness.sign_in("u1");

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/resumes")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(r#"{"file":"cv.pdf"}"#))
            .unwrap();
        let response = build_router(harness.state()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert!(harness.resumes.is_empty());
    }
}
