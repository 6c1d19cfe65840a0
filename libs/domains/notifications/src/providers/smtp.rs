//! SMTP email provider implementation using lettre.

use super::{EmailContent, EmailProvider, DeliveryReceipt};
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error, info};

/// Transport security for the SMTP connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpTls {
    /// Plain text. Only for local relays such as Mailpit.
    None,
    /// Upgrade with STARTTLS after connecting.
    StartTls,
    /// TLS from the first byte (SMTPS).
    Tls,
}

impl SmtpTls {
    /// 465 is implicit TLS, everything else negotiates STARTTLS.
    pub fn for_port(port: u16) -> Self {
        if port == 465 { Self::Tls } else { Self::StartTls }
    }
}

impl fmt::Display for SmtpTls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::StartTls => "starttls",
            Self::Tls => "tls",
        })
    }
}

impl FromStr for SmtpTls {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "plain" => Ok(Self::None),
            "starttls" => Ok(Self::StartTls),
            "tls" | "ssl" => Ok(Self::Tls),
            other => Err(format!("'{}' is not one of none, starttls, tls", other)),
        }
    }
}

/// SMTP configuration.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server host.
    pub host: String,
    /// SMTP server port.
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Sender address placed in From.
    pub from_email: String,
    /// Optional display name for From.
    pub from_name: Option<String>,
    pub tls: SmtpTls,
    /// Bound on connect and each SMTP command.
    pub timeout: Duration,
}

impl SmtpConfig {
    /// Create a configuration that sends as `username`, with TLS derived from the port.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let username = username.into();
        Self {
            host: host.into(),
            port,
            from_email: username.clone(),
            username,
            password: password.into(),
            from_name: None,
            tls: SmtpTls::for_port(port),
            timeout: Duration::from_secs(30),
        }
    }

    /// Builder method to set the From header.
    pub fn with_from(mut self, email: impl Into<String>, name: Option<String>) -> Self {
        self.from_email = email.into();
        self.from_name = name;
        self
    }

    /// Builder method to set TLS.
    pub fn with_tls(mut self, tls: SmtpTls) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn from_mailbox(&self) -> NotificationResult<Mailbox> {
        let address = self.from_email.parse().map_err(|e| {
            NotificationError::Config(format!("invalid sender address '{}': {}", self.from_email, e))
        })?;
        Ok(Mailbox::new(self.from_name.clone(), address))
    }
}

/// SMTP email provider.
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    host: String,
    port: u16,
}

impl SmtpProvider {
    /// Create a new SMTP provider. Does not connect.
    pub fn new(config: SmtpConfig) -> NotificationResult<Self> {
        let transport = Self::build_transport(&config)?;
        Ok(Self {
            transport,
            from: config.from_mailbox()?,
            host: config.host,
            port: config.port,
        })
    }

    /// Build the SMTP transport based on configuration.
    fn build_transport(
        config: &SmtpConfig,
    ) -> NotificationResult<AsyncSmtpTransport<Tokio1Executor>> {
        let builder = match config.tls {
            SmtpTls::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host).map_err(
                |e| NotificationError::Config(format!("failed to create SMTP relay: {}", e)),
            )?,
            SmtpTls::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| {
                    NotificationError::Config(format!("failed to create SMTP relay: {}", e))
                })?,
            SmtpTls::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
        };

        Ok(builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(config.timeout))
            .build())
    }

    /// Build a lettre Message from EmailContent.
    fn build_message(&self, email: &EmailContent) -> NotificationResult<Message> {
        let to: Mailbox = email.to_email.parse().map_err(|e| {
            NotificationError::Delivery(format!("invalid recipient '{}': {}", email.to_email, e))
        })?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .map_err(|e| NotificationError::Delivery(format!("failed to build message: {}", e)))
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &EmailContent) -> NotificationResult<DeliveryReceipt> {
        debug!(
            to = %email.to_email,
            subject = %email.subject,
            host = %self.host,
            port = %self.port,
            "Sending email via SMTP"
        );

        let message = self.build_message(email)?;

        let response = self.transport.send(message).await.map_err(|e| {
            error!(
                to = %email.to_email,
                error = %e,
                "Failed to send email via SMTP"
            );
            NotificationError::Delivery(format!("SMTP send failed: {}", e))
        })?;

        let reply = response.message().next().map(|s| s.to_string());

        info!(
            to = %email.to_email,
            code = %response.code(),
            reply = ?reply,
            "Email accepted by SMTP relay"
        );

        Ok(DeliveryReceipt { reply })
    }

    fn name(&self) -> &'static str {
        "SMTP"
    }

    async fn health_check(&self) -> NotificationResult<bool> {
        self.transport.test_connection().await.map_err(|e| {
            NotificationError::Delivery(format!("SMTP health check failed: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tls_follows_port() {
        assert_eq!(SmtpTls::for_port(465), SmtpTls::Tls);
        assert_eq!(SmtpTls::for_port(587), SmtpTls::StartTls);
        assert_eq!(SmtpTls::for_port(25), SmtpTls::StartTls);
    }

    #[test]
    fn test_tls_from_str() {
        assert_eq!("TLS".parse::<SmtpTls>().unwrap(), SmtpTls::Tls);
        assert_eq!("starttls".parse::<SmtpTls>().unwrap(), SmtpTls::StartTls);
        assert_eq!("none".parse::<SmtpTls>().unwrap(), SmtpTls::None);
        assert!("maybe".parse::<SmtpTls>().is_err());
    }

    #[test]
    fn test_smtp_config_new_sends_as_username() {
        let config = SmtpConfig::new("mail.example.com", 587, "noreply@example.com", "secret");
        assert_eq!(config.from_email, "noreply@example.com");
        assert_eq!(config.tls, SmtpTls::StartTls);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_build_message_sets_headers() {
        let config = SmtpConfig::new("localhost", 1025, "bot@example.com", "pw")
            .with_tls(SmtpTls::None)
            .with_from("noreply@example.com", Some("Email Service".into()));
        let provider = SmtpProvider::new(config).unwrap();

        let message = provider
            .build_message(&EmailContent {
                to_email: "user@example.com".into(),
                subject: "Hello".into(),
                html_body: "<p>Hi</p>".into(),
            })
            .unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Email Service"));
        assert!(raw.contains("<noreply@example.com>"));
        assert!(raw.contains("To: user@example.com"));
        assert!(raw.contains("Subject: Hello"));
        assert!(raw.contains("Content-Type: text/html"));
    }

    #[test]
    fn test_invalid_sender_is_config_error() {
        let config = SmtpConfig::new("localhost", 1025, "not-an-address", "pw");
        let err = SmtpProvider::new(config).err().unwrap();
        assert!(matches!(err, NotificationError::Config(_)));
    }
}
