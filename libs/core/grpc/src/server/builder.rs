//! Health reporting and startup logging for gRPC servers.
//!
//! ```ignore
//! use grpc_helpers::server::{GrpcServer, ServerConfig};
//! use protos::email::v1::email_server::{EmailServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = GrpcServer::health_service();
//!
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(EmailServer::new(my_impl))
//!     .serve(config.socket_addr()?)
//!     .await?;
//! ```

use super::config::ServerConfig;
use tonic_health::ServingStatus;
use tonic_health::pb::health_server::{Health, HealthServer};
use tonic_health::server::HealthReporter;
use tracing::info;

/// Namespace for server bootstrap helpers.
pub struct GrpcServer;

impl GrpcServer {
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = if config.enable_compression { "zstd" } else { "off" },
            max_message_size = config.max_decoding_message_size,
            "gRPC server starting"
        );
    }

    /// Creates the `grpc.health.v1.Health` service and its reporter.
    pub fn health_service() -> (HealthReporter, HealthServer<impl Health>) {
        tonic_health::server::health_reporter()
    }

    /// Marks `service_name` and the overall server ("") as serving.
    ///
    /// Kubernetes gRPC probes query the empty name.
    pub async fn setup_health(health_reporter: &HealthReporter, service_name: &str) {
        Self::set_status(health_reporter, service_name, ServingStatus::Serving).await;
    }

    /// Flips both entries to NOT_SERVING so probes fail while connections drain.
    pub async fn set_not_serving(health_reporter: &HealthReporter, service_name: &str) {
        Self::set_status(health_reporter, service_name, ServingStatus::NotServing).await;
    }

    async fn set_status(health_reporter: &HealthReporter, service_name: &str, status: ServingStatus) {
        for name in [service_name, ""] {
            health_reporter.set_service_status(name, status).await;
        }
        info!(service = service_name, status = ?status, "gRPC health status updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_lifecycle_transitions() {
        let (reporter, _service) = GrpcServer::health_service();

        GrpcServer::setup_health(&reporter, "email.v1.Email").await;
        GrpcServer::set_not_serving(&reporter, "email.v1.Email").await;
        GrpcServer::setup_health(&reporter, "email.v1.Email").await;
    }

    #[test]
    fn test_log_startup_without_subscriber() {
        GrpcServer::log_startup(&ServerConfig::default().with_compression(false), "email.v1.Email");
    }
}
