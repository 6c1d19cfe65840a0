//! Service configuration, read once at startup from environment variables.

use core_config::redis::RedisConfig;
use core_config::server::ServerConfig;
use core_config::{
    ConfigError, Environment, FromEnv, env_bool, env_duration, env_optional, env_or_default,
    env_parse,
};
use domain_notifications::{
    EmailKind, SmtpConfig, SmtpTls, TemplateSettings, TemplateSource, VerificationConfig,
};
use std::path::PathBuf;
use std::time::Duration;

/// Longest accepted `VERIFY_CODE_EXPIRE`.
pub const MAX_CODE_EXPIRE: Duration = Duration::from_secs(24 * 60 * 60);

/// Where verification codes and cooldown marks live.
#[derive(Debug, Clone)]
pub enum CacheBackend {
    /// Process-local map, swept every `sweep_interval`.
    Memory { sweep_interval: Duration },
    Redis(RedisConfig),
}

impl FromEnv for CacheBackend {
    fn from_env() -> Result<Self, ConfigError> {
        let backend = env_or_default("CACHE_BACKEND", "memory");
        match backend.trim().to_ascii_lowercase().as_str() {
            "memory" => {
                let sweep_interval = env_duration("CACHE_SWEEP_INTERVAL", Duration::from_secs(60))?;
                if sweep_interval.is_zero() {
                    return Err(ConfigError::Invalid {
                        key: "CACHE_SWEEP_INTERVAL".to_string(),
                        details: "must be greater than zero".to_string(),
                    });
                }
                Ok(CacheBackend::Memory { sweep_interval })
            }
            "redis" => Ok(CacheBackend::Redis(RedisConfig::from_env()?)),
            other => Err(ConfigError::Invalid {
                key: "CACHE_BACKEND".to_string(),
                details: format!("'{}' is not one of memory, redis", other),
            }),
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub http: ServerConfig,
    pub grpc: grpc_helpers::ServerConfig,
    pub smtp: SmtpConfig,
    /// Test the SMTP connection before serving.
    pub verify_smtp_on_startup: bool,
    pub verification: VerificationConfig,
    pub cache: CacheBackend,
    pub template_source: TemplateSource,
    /// One entry per kind, in [`EmailKind::ALL`] order.
    pub templates: Vec<TemplateSettings>,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            http: ServerConfig::from_env()?,
            grpc: grpc_helpers::ServerConfig::from_env()?,
            smtp: smtp_from_env()?,
            verify_smtp_on_startup: env_bool("SMTP_VERIFY_ON_STARTUP", true)?,
            verification: verification_from_env()?,
            cache: CacheBackend::from_env()?,
            template_source: TemplateSource {
                dir: PathBuf::from(env_or_default("TEMPLATE_DIR", "data/templates")),
                download_prefix: env_optional("TEMPLATE_DOWNLOAD_PREFIX"),
            },
            templates: EmailKind::ALL
                .into_iter()
                .map(template_from_env)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Blank values count as missing.
fn required(key: &str) -> Result<String, ConfigError> {
    env_optional(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

fn smtp_from_env() -> Result<SmtpConfig, ConfigError> {
    let port: u16 = env_parse("SMTP_PORT", 587)?;
    if port == 0 || port == u16::MAX {
        return Err(ConfigError::Invalid {
            key: "SMTP_PORT".to_string(),
            details: format!("{} is outside 1..=65534", port),
        });
    }

    let username = required("SMTP_USERNAME")?;
    let password = required("SMTP_PASSWORD")?;
    let from_email = env_optional("SMTP_FROM_EMAIL").unwrap_or_else(|| username.clone());

    Ok(
        SmtpConfig::new(env_or_default("SMTP_HOST", "smtp.example.com"), port, username, password)
            .with_from(from_email, env_optional("SMTP_FROM_NAME"))
            .with_tls(env_parse("SMTP_TLS", SmtpTls::for_port(port))?)
            .with_timeout(env_duration("SMTP_TIMEOUT", Duration::from_secs(30))?),
    )
}

fn verification_from_env() -> Result<VerificationConfig, ConfigError> {
    let defaults = VerificationConfig::default();
    let expire = env_duration("VERIFY_CODE_EXPIRE", defaults.expire)?;
    let interval = env_duration("VERIFY_CODE_INTERVAL", defaults.interval)?;

    if expire.is_zero() {
        return Err(ConfigError::Invalid {
            key: "VERIFY_CODE_EXPIRE".to_string(),
            details: "must be greater than zero".to_string(),
        });
    }
    if expire > MAX_CODE_EXPIRE {
        return Err(ConfigError::Invalid {
            key: "VERIFY_CODE_EXPIRE".to_string(),
            details: format!("{:?} exceeds the {:?} limit", expire, MAX_CODE_EXPIRE),
        });
    }
    if interval > expire {
        return Err(ConfigError::Invalid {
            key: "VERIFY_CODE_INTERVAL".to_string(),
            details: format!("{:?} exceeds VERIFY_CODE_EXPIRE ({:?})", interval, expire),
        });
    }

    Ok(VerificationConfig { expire, interval })
}

fn template_from_env(kind: EmailKind) -> Result<TemplateSettings, ConfigError> {
    let prefix = kind.env_prefix();
    let defaults = TemplateSettings::defaults(kind);

    Ok(TemplateSettings {
        kind,
        enabled: env_bool(&format!("{}_ENABLED", prefix), defaults.enabled)?,
        file: env_optional(&format!("{}_FILE", prefix)).unwrap_or(defaults.file),
        subject: env_optional(&format!("{}_SUBJECT", prefix)).unwrap_or(defaults.subject),
    })
}
