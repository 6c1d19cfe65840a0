//! # gRPC Helpers
//!
//! Server-side utilities shared by gRPC services:
//!
//! - **[`server`]**: environment-driven server configuration, health reporting,
//!   startup logging
//! - **[`error`]**: bind address errors and validation messages as `tonic::Status`
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_helpers::server::{GrpcServer, ServerConfig};
//! use core_config::FromEnv;
//! use protos::email::v1::email_server::{EmailServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = GrpcServer::health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(
//!         EmailServer::new(my_impl)
//!             .max_decoding_message_size(config.max_decoding_message_size),
//!     )
//!     .serve(config.socket_addr()?)
//!     .await?;
//! ```

pub mod error;
pub mod server;

pub use error::{GrpcError, GrpcResult, ToTonicResult};
pub use server::{GrpcServer, ServerConfig};
