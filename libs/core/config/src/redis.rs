use crate::{env_optional, env_or_default, env_parse, ConfigError, FromEnv};

/// Redis connection settings
#[derive(Clone, Debug)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
}

impl RedisConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            password: None,
        }
    }

    /// Connection URL in the form accepted by `redis::Client::open`.
    pub fn url(&self) -> String {
        match &self.password {
            Some(password) => format!("redis://:{}@{}:{}", password, self.host, self.port),
            None => format!("redis://{}:{}", self.host, self.port),
        }
    }
}

impl FromEnv for RedisConfig {
    /// Reads REDIS_HOST (default 127.0.0.1), REDIS_PORT (default 6379) and REDIS_PASSWORD.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or_default("REDIS_HOST", "127.0.0.1"),
            port: env_parse("REDIS_PORT", 6379)?,
            password: env_optional("REDIS_PASSWORD"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_config_defaults() {
        temp_env::with_vars(
            [
                ("REDIS_HOST", None::<&str>),
                ("REDIS_PORT", None),
                ("REDIS_PASSWORD", None),
            ],
            || {
                let config = RedisConfig::from_env().unwrap();
                assert_eq!(config.url(), "redis://127.0.0.1:6379");
            },
        );
    }

    #[test]
    fn test_redis_config_with_password() {
        temp_env::with_vars(
            [
                ("REDIS_HOST", Some("cache")),
                ("REDIS_PORT", Some("6380")),
                ("REDIS_PASSWORD", Some("secret")),
            ],
            || {
                let config = RedisConfig::from_env().unwrap();
                assert_eq!(config.url(), "redis://:secret@cache:6380");
            },
        );
    }

    #[test]
    fn test_redis_config_invalid_port() {
        temp_env::with_var("REDIS_PORT", Some("redis"), || {
            let err = RedisConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("REDIS_PORT"));
        });
    }
}
