//! Outbound mail transports.
//!
//! [`SmtpProvider`] talks to the configured relay. [`RecordingProvider`]
//! keeps messages in memory and can be told to fail.

mod recording;
mod smtp;

pub use recording::RecordingProvider;
pub use smtp::{SmtpConfig, SmtpProvider, SmtpTls};

use crate::error::NotificationResult;
use async_trait::async_trait;

/// What the relay said after taking a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// First line of the final SMTP reply, usually carrying the queue id.
    pub reply: Option<String>,
}

/// A rendered message for one recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailContent {
    /// Lower-cased recipient.
    pub to_email: String,
    pub subject: String,
    pub html_body: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Hands one message to the transport. A rejected message is
    /// `NotificationError::Delivery`.
    async fn send(&self, email: &EmailContent) -> NotificationResult<DeliveryReceipt>;

    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// `Ok(false)` when the server answered but refused the probe.
    async fn health_check(&self) -> NotificationResult<bool>;
}
