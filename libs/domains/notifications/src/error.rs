//! Error types for the notifications domain.

use crate::kinds::EmailKind;
use axum_helpers::AppError;
use std::time::Duration;
use thiserror::Error;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Result type for verification code operations.
pub type VerificationResult<T> = Result<T, VerificationError>;

/// Result type for TTL store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while building the registry or sending a notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The kind exists but its template is switched off.
    #[error("Email kind '{0}' is not enabled")]
    KindDisabled(EmailKind),

    /// No kind is known under this id.
    #[error("Unknown email kind: {0}")]
    UnknownKind(String),

    /// Payload does not have the shape the kind's template expects.
    #[error("Invalid payload for '{kind}': {reason}")]
    PayloadInvalid { kind: EmailKind, reason: String },

    /// Template rendering error.
    #[error("Template rendering error: {0}")]
    Render(String),

    /// Email provider error.
    #[error("Email delivery failed: {0}")]
    Delivery(String),

    /// Template could not be loaded or compiled.
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<handlebars::RenderError> for NotificationError {
    fn from(err: handlebars::RenderError) -> Self {
        NotificationError::Render(err.to_string())
    }
}

impl From<handlebars::TemplateError> for NotificationError {
    fn from(err: handlebars::TemplateError) -> Self {
        NotificationError::Template(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for NotificationError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        NotificationError::Delivery(err.to_string())
    }
}

/// Errors from the verification code lifecycle.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// A code was issued recently; the caller must wait `remaining`.
    #[error("Verification code already sent, retry in {} seconds", remaining_secs(.remaining))]
    Cooldown { remaining: Duration },

    /// No live code for the recipient (never issued, expired or consumed).
    #[error("Verification code expired or not found")]
    Expired,

    /// A code exists but the code or control id does not match.
    #[error("Verification code does not match")]
    Invalid,

    /// Backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl VerificationError {
    /// Remaining cooldown rounded up to whole seconds, if this is a cooldown.
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::Cooldown { remaining } => Some(remaining_secs(remaining)),
            _ => None,
        }
    }
}

fn remaining_secs(remaining: &Duration) -> u64 {
    let secs = remaining.as_secs();
    if remaining.subsec_nanos() > 0 { secs + 1 } else { secs }
}

/// Errors from a [`TtlStore`](crate::store::TtlStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        StoreError::Backend(err.to_string())
    }
}

impl From<NotificationError> for AppError {
    /// The only HTTP send is the code mail, built server side, so every
    /// failure is ours.
    fn from(err: NotificationError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<VerificationError> for AppError {
    fn from(err: VerificationError) -> Self {
        match err {
            VerificationError::Cooldown { .. } => {
                let retry_after_secs = err.retry_after_secs().unwrap_or_default();
                AppError::RetryLater {
                    message: err.to_string(),
                    retry_after_secs,
                }
            }
            VerificationError::Expired | VerificationError::Invalid => {
                AppError::BadRequest(err.to_string())
            }
            VerificationError::Store(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_rounds_up() {
        let err = VerificationError::Cooldown {
            remaining: Duration::from_millis(41_200),
        };
        assert_eq!(err.retry_after_secs(), Some(42));
        assert_eq!(
            err.to_string(),
            "Verification code already sent, retry in 42 seconds"
        );
    }

    #[test]
    fn test_verification_errors_map_to_http() {
        let err = AppError::from(VerificationError::Cooldown {
            remaining: Duration::from_millis(500),
        });
        assert!(matches!(err, AppError::RetryLater { retry_after_secs: 1, .. }));

        assert!(matches!(
            AppError::from(VerificationError::Invalid),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(VerificationError::Store(StoreError::Backend("down".into()))),
            AppError::InternalServerError(_)
        ));
    }

    #[test]
    fn test_whole_seconds_are_not_bumped() {
        let err = VerificationError::Cooldown {
            remaining: Duration::from_secs(60),
        };
        assert_eq!(err.retry_after_secs(), Some(60));
        assert_eq!(VerificationError::Expired.retry_after_secs(), None);
    }
}
