//! Recording email provider for testing

use super::{EmailContent, EmailProvider, DeliveryReceipt};
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Email provider that keeps every sent email in memory
#[derive(Clone)]
pub struct RecordingProvider {
    sent_emails: Arc<Mutex<Vec<EmailContent>>>,
    failure_message: Option<String>,
}

impl RecordingProvider {
    /// Create a new recording provider
    pub fn new() -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            failure_message: None,
        }
    }

    /// Create a provider whose sends and health checks always fail
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            failure_message: Some(message.into()),
        }
    }

    /// Get all sent emails
    pub async fn sent_emails(&self) -> Vec<EmailContent> {
        self.sent_emails.lock().await.clone()
    }

    /// Get the count of sent emails
    pub async fn sent_count(&self) -> usize {
        self.sent_emails.lock().await.len()
    }

    /// Check if an email was sent to a specific address
    pub async fn was_sent_to(&self, email: &str) -> bool {
        self.sent_emails
            .lock()
            .await
            .iter()
            .any(|e| e.to_email == email)
    }
}

impl Default for RecordingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
    async fn send(&self, email: &EmailContent) -> NotificationResult<DeliveryReceipt> {
        if let Some(message) = &self.failure_message {
            return Err(NotificationError::Delivery(message.clone()));
        }

        let mut sent = self.sent_emails.lock().await;
        sent.push(email.clone());

        Ok(DeliveryReceipt {
            reply: Some(format!("250 OK queued as recorded-{}", sent.len())),
        })
    }

    fn name(&self) -> &'static str {
        "recording"
    }

    async fn health_check(&self) -> NotificationResult<bool> {
        if let Some(message) = &self.failure_message {
            return Err(NotificationError::Delivery(message.clone()));
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str) -> EmailContent {
        EmailContent {
            to_email: to.to_string(),
            subject: "Test Subject".to_string(),
            html_body: "<p>Test body</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_recording_provider_sends_email() {
        let provider = RecordingProvider::new();

        let result = provider.send(&email("test@example.com")).await.unwrap();
        assert_eq!(result.reply.as_deref(), Some("250 OK queued as recorded-1"));

        let sent = provider.sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "test@example.com");
    }

    #[tokio::test]
    async fn test_recording_provider_fails() {
        let provider = RecordingProvider::failing("Simulated failure");

        let err = provider.send(&email("test@example.com")).await.unwrap_err();
        assert!(err.to_string().contains("Simulated failure"));
        assert_eq!(provider.sent_count().await, 0);
        assert!(provider.health_check().await.is_err());
    }

    #[tokio::test]
    async fn test_recording_provider_was_sent_to() {
        let provider = RecordingProvider::new();
        provider.send(&email("user@example.com")).await.unwrap();

        assert!(provider.was_sent_to("user@example.com").await);
        assert!(!provider.was_sent_to("other@example.com").await);
    }
}
