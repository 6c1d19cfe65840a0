use crate::{env_duration, env_or_default, env_parse, ConfigError, FromEnv};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// HTTP listener configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for a single request, including SMTP delivery of a code mail.
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// "host:port", suitable for `TcpListener::bind`
    pub fn address(&self) -> String {
        SocketAddr::new(self.ip().unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)), self.port)
            .to_string()
    }

    fn ip(&self) -> Result<IpAddr, ConfigError> {
        self.host
            .trim_matches(|c| c == '[' || c == ']')
            .parse()
            .map_err(|_| ConfigError::Invalid {
                key: "HOST".to_string(),
                details: format!("'{}' is not an IP address", self.host),
            })
    }
}

impl FromEnv for ServerConfig {
    /// Reads HOST, PORT and HTTP_REQUEST_TIMEOUT.
    fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            host: env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string()),
            port: env_parse("PORT", Self::DEFAULT_PORT)?,
            request_timeout: env_duration("HTTP_REQUEST_TIMEOUT", Self::DEFAULT_REQUEST_TIMEOUT)?,
        };
        config.ip()?;

        if config.request_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: "HTTP_REQUEST_TIMEOUT".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), Self::DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 3] = ["HOST", "PORT", "HTTP_REQUEST_TIMEOUT"];

    fn with_env<R>(values: [Option<&str>; 3], f: impl FnOnce() -> R) -> R {
        temp_env::with_vars(VARS.into_iter().zip(values).collect::<Vec<_>>(), f)
    }

    #[test]
    fn test_defaults() {
        with_env([None, None, None], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "0.0.0.0:8080");
            assert_eq!(config.request_timeout, Duration::from_secs(30));
        });
    }

    #[test]
    fn test_custom_values() {
        with_env([Some("127.0.0.1"), Some("3000"), Some("5s")], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "127.0.0.1:3000");
            assert_eq!(config.request_timeout, Duration::from_secs(5));
        });
    }

    #[test]
    fn test_ipv6_host_is_bracketed() {
        with_env([Some("[::1]"), Some("8081"), None], || {
            assert_eq!(ServerConfig::from_env().unwrap().address(), "[::1]:8081");
        });
    }

    #[test]
    fn test_hostname_is_rejected() {
        with_env([Some("localhost"), None, None], || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("HOST"));
        });
    }

    #[test]
    fn test_port_out_of_range() {
        with_env([None, Some("99999"), None], || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        with_env([None, None, Some("0s")], || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("HTTP_REQUEST_TIMEOUT"));
        });
    }
}
