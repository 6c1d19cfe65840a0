//! HTTP plumbing for the email service.
//!
//! [`server::create_router`] mounts the API under `/api` next to the OpenAPI
//! document, [`server::health_router`] adds the liveness probe, and
//! [`server::create_app_with_shutdown`] binds the listener with a request
//! timeout. Handlers reject bad bodies through [`ValidatedJson`] and report
//! failures as an [`ErrorResponse`] envelope:
//!
//! ```json
//! { "code": 1001, "error": "VALIDATION_ERROR", "message": "email: invalid email address" }
//! ```
//!
//! ```ignore
//! let router = create_router::<ApiDoc>(Router::new().nest("/v1", handlers::router(state)))?
//!     .merge(health_router(app_info!()));
//! create_app_with_shutdown(router, &config.http, shutdown).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, create_app, create_app_with_shutdown, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::ValidatedJson;
