//! Email Service
//!
//! Sends templated notification mails and manages email verification codes.
//!
//! ## Architecture
//!
//! ```text
//! HTTP client                      gRPC client
//!   ↓ POST /api/v1/emails/code       ↓ email.v1.Email (Zstd)
//! domain handlers                  EmailServiceImpl (service.rs)
//!   ↓                                ↓ required fields, proto → payload
//! CodeManager ─────────┬─────────  EmailSender
//!   ↓                  │             ↓ registry, Handlebars, SMTP
//! TtlStore (memory / Redis)        EmailProvider
//! ```
//!
//! ## Modules
//!
//! - `config`: Environment configuration
//! - `health`: Readiness probe
//! - `server`: Wiring and lifecycle of both servers
//! - `service`: gRPC service implementation (EmailServiceImpl)
//! - `openapi`: OpenAPI document for the HTTP API

pub mod config;
pub mod health;
pub mod openapi;
pub mod server;
pub mod service;

// Re-export for convenience
pub use config::Config;
pub use server::run;
pub use service::EmailServiceImpl;
