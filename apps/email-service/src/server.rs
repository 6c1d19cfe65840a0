//! Server initialization and lifecycle management
//!
//! This module handles all server setup:
//! - Tracing initialization
//! - Template loading and SMTP transport
//! - Code and cooldown stores (memory or Redis)
//! - HTTP server (verification code endpoint, probes, OpenAPI document)
//! - gRPC server with the health service (grpc.health.v1.Health)
//!
//! Both servers share one shutdown signal and stop together.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum_helpers::server::{create_app_with_shutdown, create_router, health_router, shutdown_signal};
use core_config::{Environment, FromEnv, app_info};
use domain_notifications::handlers::{self, EmailState};
use domain_notifications::store::connect_redis;
use domain_notifications::{
    CodeManager, CooldownMark, EmailProvider, EmailSender, InMemoryTtlStore, IssuedCode,
    RedisTtlStore, SmtpProvider, TemplateLoader, TtlStore,
};
use eyre::{Result, WrapErr, bail};
use grpc_helpers::GrpcServer;
use protos::EmailServer;
use protos::email::v1::email_server::SERVICE_NAME;
use tokio::sync::watch;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::info;

use crate::config::{CacheBackend, Config};
use crate::health;
use crate::openapi::ApiDoc;
use crate::service::EmailServiceImpl;

const CODE_PREFIX: &str = "email:code:";
const COOLDOWN_PREFIX: &str = "email:cooldown:";

/// Run the HTTP and gRPC servers
///
/// 1. Sets up structured logging (env-aware: JSON for prod, pretty for dev)
/// 2. Loads and compiles every enabled template
/// 3. Builds the SMTP transport and tests it once, unless disabled
/// 4. Creates the code manager and sender
/// 5. Serves both APIs until SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is missing or invalid
/// - A template cannot be read, downloaded or compiled
/// - The SMTP connection test or the Redis connection fails
/// - Either server fails to bind or fails while running
pub async fn run() -> Result<()> {
    // Initialize tracing (env-aware: JSON for prod, pretty for dev)
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let config = Config::from_env().wrap_err("Failed to load configuration")?;

    let registry = TemplateLoader::new(config.template_source.clone())
        .load_registry(&config.templates)
        .await
        .wrap_err("Failed to load email templates")?;

    let provider = SmtpProvider::new(config.smtp.clone()).wrap_err("Failed to build SMTP transport")?;
    if config.verify_smtp_on_startup {
        info!("Testing SMTP connection...");
        let reachable = provider
            .health_check()
            .await
            .wrap_err("SMTP connection test failed")?;
        if !reachable {
            bail!(
                "SMTP server {}:{} rejected the connection test",
                config.smtp.host,
                config.smtp.port
            );
        }
        info!("SMTP connection verified");
    }

    let (codes, cooldowns) = build_stores(&config.cache).await?;
    let codes = Arc::new(CodeManager::new(codes, cooldowns, config.verification));
    let sender = EmailSender::new(Arc::new(registry), Arc::new(provider), config.smtp.timeout);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        // Receivers only disappear once both servers have exited.
        let _ = shutdown_tx.send(true);
    });

    let state = EmailState {
        codes: Arc::clone(&codes),
        sender: sender.clone(),
    };
    let http = serve_http(&config, state, wait_for_shutdown(shutdown_rx.clone()));
    let grpc = serve_grpc(&config, EmailServiceImpl::new(sender, codes), shutdown_rx);

    tokio::try_join!(http, grpc)?;

    info!("Email service shutdown complete");
    Ok(())
}

type CodeStore = Arc<dyn TtlStore<IssuedCode>>;
type CooldownStore = Arc<dyn TtlStore<CooldownMark>>;

async fn build_stores(cache: &CacheBackend) -> Result<(CodeStore, CooldownStore)> {
    match cache {
        CacheBackend::Memory { sweep_interval } => {
            let codes = Arc::new(InMemoryTtlStore::<IssuedCode>::new());
            let cooldowns = Arc::new(InMemoryTtlStore::<CooldownMark>::new());
            codes.spawn_sweeper(*sweep_interval);
            cooldowns.spawn_sweeper(*sweep_interval);
            info!(sweep_interval = ?sweep_interval, "Using in-memory code store");
            Ok((codes as CodeStore, cooldowns as CooldownStore))
        }
        CacheBackend::Redis(redis) => {
            info!(host = %redis.host, port = redis.port, "Connecting to Redis...");
            let conn = connect_redis(&redis.url())
                .await
                .wrap_err("Failed to connect to Redis")?;
            info!("Connected to Redis successfully");
            let codes: CodeStore = Arc::new(RedisTtlStore::<IssuedCode>::new(conn.clone(), CODE_PREFIX));
            let cooldowns: CooldownStore =
                Arc::new(RedisTtlStore::<CooldownMark>::new(conn, COOLDOWN_PREFIX));
            Ok((codes, cooldowns))
        }
    }
}

async fn serve_http<F>(config: &Config, state: EmailState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let api_routes = Router::new().nest("/v1", handlers::router(state.clone()));
    let app = create_router::<ApiDoc>(api_routes)
        .wrap_err("Failed to build HTTP router")?
        .merge(health_router(app_info!()))
        .merge(health::router(state));

    create_app_with_shutdown(app, &config.http, shutdown)
        .await
        .wrap_err("HTTP server failed")
}

async fn serve_grpc(
    config: &Config,
    service: EmailServiceImpl,
    shutdown_rx: watch::Receiver<bool>,
) -> Result<()> {
    let addr = config
        .grpc
        .socket_addr()
        .wrap_err("Invalid gRPC listen address")?;

    // Create health reporter for Kubernetes probes
    let (health_reporter, health_service) = GrpcServer::health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;

    let mut email_server = EmailServer::new(service)
        .max_decoding_message_size(config.grpc.max_decoding_message_size)
        .max_encoding_message_size(config.grpc.max_encoding_message_size);
    if config.grpc.enable_compression {
        email_server = email_server
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }

    GrpcServer::log_startup(&config.grpc, SERVICE_NAME);

    let shutdown = async move {
        wait_for_shutdown(shutdown_rx).await;
        GrpcServer::set_not_serving(&health_reporter, SERVICE_NAME).await;
    };

    Server::builder()
        .add_service(health_service)
        .add_service(email_server)
        .serve_with_shutdown(addr, shutdown)
        .await
        .wrap_err("gRPC server failed")
}

fn wait_for_shutdown(mut rx: watch::Receiver<bool>) -> impl Future<Output = ()> + Send + 'static {
    async move {
        // A closed channel means the signal task is gone; stop as well.
        let _ = rx.wait_for(|stop| *stop).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_memory_backend_builds_working_stores() {
        let (codes, cooldowns) = build_stores(&CacheBackend::Memory {
            sweep_interval: Duration::from_secs(60),
        })
        .await
        .unwrap();

        let entry = IssuedCode {
            cid: 1,
            code: "AbC123".into(),
        };
        codes
            .set("pilot@example.com", entry.clone(), Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(codes.get("pilot@example.com").await.unwrap(), Some(entry));
        assert!(cooldowns.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_shutdown_waiter_resolves_on_signal() {
        let (tx, rx) = watch::channel(false);
        let waiter = tokio::spawn(wait_for_shutdown(rx));

        tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_waiter_resolves_when_sender_dropped() {
        let (tx, rx) = watch::channel(false);
        drop(tx);
        tokio::time::timeout(Duration::from_secs(1), wait_for_shutdown(rx))
            .await
            .unwrap();
    }
}
