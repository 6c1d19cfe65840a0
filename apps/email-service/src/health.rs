//! Readiness probe with real cache and SMTP checks.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use domain_notifications::handlers::EmailState;

/// `GET /ready`, merged next to the liveness route.
pub fn router(state: EmailState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}

/// Runs the cache and SMTP checks concurrently. 503 if either fails.
pub async fn ready_handler(State(state): State<EmailState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "cache",
            Box::pin(async {
                state
                    .codes
                    .health_check()
                    .await
                    .map_err(|e| format!("Cache ping failed: {}", e))
            }),
        ),
        (
            "smtp",
            Box::pin(async {
                match state.sender.health_check().await {
                    Ok(true) => Ok(()),
                    Ok(false) => Err("SMTP server rejected the connection test".to_string()),
                    Err(e) => Err(format!("SMTP check failed: {}", e)),
                }
            }),
        ),
    ];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
