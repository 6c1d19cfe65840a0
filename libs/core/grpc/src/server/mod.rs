//! gRPC server utilities.

pub mod builder;
pub mod config;

pub use builder::GrpcServer;
pub use config::ServerConfig;
