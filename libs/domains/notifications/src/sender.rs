//! Validate, render and deliver one notification.

use crate::error::{NotificationError, NotificationResult};
use crate::kinds::EmailKind;
use crate::models::EmailPayload;
use crate::providers::{EmailContent, EmailProvider};
use crate::registry::KindRegistry;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Sends templated emails through an [`EmailProvider`].
#[derive(Clone)]
pub struct EmailSender {
    registry: Arc<KindRegistry>,
    provider: Arc<dyn EmailProvider>,
    timeout: Duration,
}

impl EmailSender {
    /// `timeout` bounds one delivery, independent of the caller's deadline.
    pub fn new(
        registry: Arc<KindRegistry>,
        provider: Arc<dyn EmailProvider>,
        timeout: Duration,
    ) -> Self {
        Self {
            registry,
            provider,
            timeout,
        }
    }

    pub fn registry(&self) -> &Arc<KindRegistry> {
        &self.registry
    }

    /// Send one email of `kind` to `recipient`.
    ///
    /// Nothing is rendered or delivered unless the kind is enabled and the
    /// payload passes validation. Delivery runs on its own task, so dropping
    /// this future does not abort a send already handed to the provider.
    #[instrument(skip(self, payload), fields(kind = %kind, recipient = %recipient))]
    pub async fn send_email(
        &self,
        kind: EmailKind,
        recipient: &str,
        payload: &EmailPayload,
    ) -> NotificationResult<()> {
        let registered = self.registry.resolve(kind, payload).map_err(|e| {
            warn!(error = %e, "Email rejected");
            e
        })?;

        let html_body = self.registry.render(kind, payload).map_err(|e| {
            error!(error = %e, "Failed to render email template");
            e
        })?;

        let content = EmailContent {
            to_email: recipient.to_lowercase(),
            subject: registered.subject.clone(),
            html_body,
        };

        let provider = Arc::clone(&self.provider);
        let timeout = self.timeout;
        let delivery =
            tokio::spawn(async move { tokio::time::timeout(timeout, provider.send(&content)).await });

        match delivery.await {
            Ok(Ok(Ok(sent))) => {
                debug!(reply = ?sent.reply, "Email delivered");
                Ok(())
            }
            Ok(Ok(Err(e))) => {
                error!(error = %e, provider = self.provider.name(), "Email delivery failed");
                Err(e)
            }
            Ok(Err(_)) => {
                error!(timeout_ms = timeout.as_millis() as u64, "Email delivery timed out");
                Err(NotificationError::Delivery(format!(
                    "delivery timed out after {:?}",
                    timeout
                )))
            }
            Err(e) => {
                error!(error = %e, "Email delivery task failed");
                Err(NotificationError::Delivery(e.to_string()))
            }
        }
    }

    /// Provider reachability, used by the readiness probe.
    pub async fn health_check(&self) -> NotificationResult<bool> {
        self.provider.health_check().await
    }
}
