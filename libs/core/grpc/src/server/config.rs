//! Server configuration loaded from environment variables.

use crate::error::{GrpcError, GrpcResult};
use core_config::{ConfigError, FromEnv, env_bool, env_or_default, env_parse};
use std::net::SocketAddr;

const DEFAULT_MESSAGE_SIZE: usize = 8 * 1024 * 1024;

/// Configuration for gRPC server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: [::1] for IPv6 localhost)
    pub host: String,
    /// Port to listen on (default: 50051)
    pub port: u16,
    /// Enable Zstd compression (default: true)
    pub enable_compression: bool,
    /// Maximum message size for decoding (default: 8MB)
    pub max_decoding_message_size: usize,
    /// Maximum message size for encoding (default: 8MB)
    pub max_encoding_message_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "[::1]".to_string(),
            port: 50051,
            enable_compression: true,
            max_decoding_message_size: DEFAULT_MESSAGE_SIZE,
            max_encoding_message_size: DEFAULT_MESSAGE_SIZE,
        }
    }
}

impl FromEnv for ServerConfig {
    /// Reads:
    /// - `GRPC_HOST` (default: [::1])
    /// - `GRPC_PORT` (default: 50051)
    /// - `GRPC_COMPRESSION` (default: true)
    /// - `GRPC_MAX_MESSAGE_SIZE` (default: 8388608 / 8MB)
    fn from_env() -> Result<Self, ConfigError> {
        let max_message_size = env_parse("GRPC_MAX_MESSAGE_SIZE", DEFAULT_MESSAGE_SIZE)?;

        Ok(Self {
            host: env_or_default("GRPC_HOST", "[::1]"),
            port: env_parse("GRPC_PORT", 50051)?,
            enable_compression: env_bool("GRPC_COMPRESSION", true)?,
            max_decoding_message_size: max_message_size,
            max_encoding_message_size: max_message_size,
        })
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    /// Get the socket address to bind to.
    pub fn socket_addr(&self) -> GrpcResult<SocketAddr> {
        let addr = self.addr_string();
        addr.parse()
            .map_err(|source| GrpcError::InvalidAddress { addr, source })
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "[::1]");
        assert_eq!(config.port, 50051);
        assert!(config.enable_compression);
        assert!(config.socket_addr().is_ok());
    }

    #[test]
    fn test_from_env_overrides() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", Some("0.0.0.0")),
                ("GRPC_PORT", Some("6000")),
                ("GRPC_COMPRESSION", Some("false")),
                ("GRPC_MAX_MESSAGE_SIZE", Some("1024")),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.addr_string(), "0.0.0.0:6000");
                assert!(!config.enable_compression);
                assert_eq!(config.max_decoding_message_size, 1024);
                assert_eq!(config.max_encoding_message_size, 1024);
            },
        );
    }

    #[test]
    fn test_from_env_rejects_bad_port() {
        temp_env::with_var("GRPC_PORT", Some("grpc"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("GRPC_PORT"));
        });
    }

    #[test]
    fn test_invalid_host_fails_socket_addr() {
        let config = ServerConfig::new().with_host("not a host").with_port(1);
        assert!(config.socket_addr().is_err());
    }
}
