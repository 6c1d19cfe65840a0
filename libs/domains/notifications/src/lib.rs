//! Notifications Domain
//!
//! Templated notification mails and the email verification code flow.
//!
//! # Features
//!
//! - Eighteen notification kinds, each bound to one Handlebars template
//! - Payload validation against the kind before anything is rendered
//! - Verification codes with resend cooldown, expiry and one-shot verify
//! - In-memory or Redis TTL storage
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐
//! │  HTTP handler    │   │  gRPC service    │  ← transport adapters
//! └───┬──────────┬───┘   └───┬──────────┬───┘
//!     │          │           │          │
//! ┌───▼────────┐ │           │   ┌──────▼──────┐
//! │ CodeManager│◄┼───────────┘   │ EmailSender │  ← validate, render, deliver
//! └───┬────────┘ └──────────────►└──┬───────┬──┘
//!     │                             │       │
//! ┌───▼────────┐           ┌────────▼──┐ ┌──▼────────────┐
//! │  TtlStore  │           │KindRegistry│ │ EmailProvider │  ← SMTP
//! └────────────┘           └───────────┘ └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_notifications::{EmailKind, EmailSender, KindRegistry, WelcomeEmail};
//!
//! let registry = KindRegistry::builder()
//!     .template(EmailKind::Welcome, "<p>Welcome, {{cid}}</p>")
//!     .build()?;
//! let sender = EmailSender::new(Arc::new(registry), provider, Duration::from_secs(30));
//!
//! let payload = WelcomeEmail { cid: "1234".into() }.into();
//! sender.send_email(EmailKind::Welcome, "pilot@example.com", &payload).await?;
//! ```

pub mod conversions;
pub mod error;
pub mod handlers;
pub mod kinds;
pub mod models;
pub mod providers;
pub mod registry;
pub mod sender;
pub mod store;
pub mod templates;
pub mod verification;

// Re-export commonly used types
pub use conversions::SendRequest;
pub use error::{
    NotificationError, NotificationResult, StoreError, StoreResult, VerificationError,
    VerificationResult,
};
pub use kinds::EmailKind;
pub use models::*;
pub use providers::{EmailContent, EmailProvider, RecordingProvider, SmtpConfig, SmtpProvider, SmtpTls};
pub use registry::{KindRegistry, KindRegistryBuilder, NotificationKind};
pub use sender::EmailSender;
pub use store::{InMemoryTtlStore, InsertOutcome, RedisTtlStore, TtlStore};
pub use templates::{TemplateLoader, TemplateSettings, TemplateSource};
pub use verification::{CodeManager, CooldownMark, IssuedCode, VerificationConfig};
