//! HTTP endpoint for requesting a verification code mail.

use crate::kinds::EmailKind;
use crate::sender::EmailSender;
use crate::verification::CodeManager;
use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{AppError, ErrorResponse, ValidatedJson};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use utoipa::{OpenApi, ToSchema};
use validator::Validate;

/// Local part, `@`, then at least two dot-separated labels.
static EMAIL_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)+$").unwrap());

fn validate_email_address(email: &str) -> Result<(), validator::ValidationError> {
    if !EMAIL_ADDRESS.is_match(email) {
        return Err(validator::ValidationError::new("invalid_email"));
    }
    Ok(())
}

/// Body of `POST /emails/code`.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SendCodeRequest {
    #[validate(custom(function = "validate_email_address"))]
    #[schema(example = "pilot@example.com")]
    pub email: String,
    /// Control id echoed in the mail and checked on verify.
    #[serde(default)]
    #[validate(range(min = 0))]
    #[schema(example = 1000)]
    pub cid: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SendCodeResponse {
    pub success: bool,
}

/// Shared state of the email routes.
#[derive(Clone)]
pub struct EmailState {
    pub codes: Arc<CodeManager>,
    pub sender: EmailSender,
}

/// OpenAPI documentation for the email API
#[derive(OpenApi)]
#[openapi(
    paths(send_code),
    components(schemas(SendCodeRequest, SendCodeResponse, ErrorResponse)),
    tags((name = "emails", description = "Verification code mails"))
)]
pub struct ApiDoc;

/// Issue a verification code and mail it
#[utoipa::path(
    post,
    path = "/emails/code",
    tag = "emails",
    request_body = SendCodeRequest,
    responses(
        (status = 200, description = "Code issued and sent", body = SendCodeResponse),
        (status = 400, description = "Invalid address, or a code was sent too recently", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn send_code(
    State(state): State<EmailState>,
    ValidatedJson(request): ValidatedJson<SendCodeRequest>,
) -> Result<Json<SendCodeResponse>, AppError> {
    let payload = state.codes.generate(&request.email, request.cid).await?;
    state
        .sender
        .send_email(EmailKind::VerifyCode, &request.email, &payload.into())
        .await?;

    Ok(Json(SendCodeResponse { success: true }))
}

/// Routes relative to the version prefix, e.g. `/api/v1`.
pub fn router(state: EmailState) -> Router {
    Router::new()
        .route("/emails/code", post(send_code))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::RecordingProvider;
    use crate::registry::KindRegistry;
    use crate::store::InMemoryTtlStore;
    use crate::verification::VerificationConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    fn app(provider: RecordingProvider) -> Router {
        let registry = KindRegistry::builder()
            .template(EmailKind::VerifyCode, "<p>{{cid}} {{code}} {{expired}}</p>")
            .build()
            .unwrap();
        let state = EmailState {
            codes: Arc::new(CodeManager::new(
                Arc::new(InMemoryTtlStore::new()),
                Arc::new(InMemoryTtlStore::new()),
                VerificationConfig::default(),
            )),
            sender: EmailSender::new(Arc::new(registry), Arc::new(provider), Duration::from_secs(5)),
        };
        router(state)
    }

    fn post_code(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/emails/code")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_email_address_pattern() {
        assert!(validate_email_address("pilot@example.com").is_ok());
        assert!(validate_email_address("first.last+tag@mail.example.org").is_ok());
        assert!(validate_email_address("pilot@localhost").is_err());
        assert!(validate_email_address("not an email").is_err());
    }

    #[tokio::test]
    async fn test_send_code_returns_success() {
        let provider = RecordingProvider::new();
        let app = app(provider.clone());

        let response = app
            .oneshot(post_code(json!({ "email": "Pilot@Example.com", "cid": 42 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response.into_body()).await, json!({ "success": true }));

        let sent = provider.sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "pilot@example.com");
        assert!(sent[0].html_body.starts_with("<p>0042 "));
        assert_eq!(sent[0].subject, EmailKind::VerifyCode.default_subject());
    }

    #[tokio::test]
    async fn test_cid_defaults_to_zero() {
        let provider = RecordingProvider::new();
        let response = app(provider.clone())
            .oneshot(post_code(json!({ "email": "pilot@example.com" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(provider.sent_emails().await[0].html_body.starts_with("<p>0000 "));
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected() {
        let provider = RecordingProvider::new();
        let response = app(provider.clone())
            .oneshot(post_code(json!({ "email": "nope" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(provider.sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_negative_cid_is_rejected() {
        let response = app(RecordingProvider::new())
            .oneshot(post_code(json!({ "email": "pilot@example.com", "cid": -1 })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_second_request_hits_cooldown() {
        let provider = RecordingProvider::new();
        let app = app(provider.clone());

        let first = app
            .clone()
            .oneshot(post_code(json!({ "email": "pilot@example.com" })))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .oneshot(post_code(json!({ "email": "PILOT@example.com" })))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        let retry_after: u64 = second.headers()[header::RETRY_AFTER]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!(retry_after > 0 && retry_after <= 60);

        let body = json_body(second.into_body()).await;
        assert_eq!(body["error"], "SEND_INTERVAL");
        assert_eq!(body["details"]["retry_after_secs"], retry_after);
        assert!(body["message"].as_str().unwrap().contains("seconds"));
        assert_eq!(provider.sent_count().await, 1);
    }

    #[tokio::test]
    async fn test_delivery_failure_is_opaque_500() {
        let response = app(RecordingProvider::failing("smtp: 535 authentication failed"))
            .oneshot(post_code(json!({ "email": "pilot@example.com" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("535"));
    }
}
