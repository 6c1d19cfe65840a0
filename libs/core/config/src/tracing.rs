//! Logging setup shared by the binaries.
//!
//! Production writes flattened JSON lines, development writes pretty output
//! with targets. Both carry an `ErrorLayer` so `eyre` reports include the
//! active spans. `RUST_LOG` replaces the defaults entirely.

use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Default directives when `RUST_LOG` is unset.
///
/// lettre logs each SMTP exchange at debug and h2 logs every frame, so both
/// stay quiet even in development.
pub fn default_directives(environment: &Environment) -> &'static str {
    match environment {
        Environment::Production => {
            "info,tower_http=warn,lettre=warn,h2=warn,hyper=warn,tonic=info"
        }
        Environment::Development => {
            "debug,domain_notifications=trace,lettre=info,h2=info,hyper=info,tower=info,reqwest=info"
        }
    }
}

fn filter_for(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)))
}

/// Install the color-eyre panic and report hooks.
///
/// Reports show the error location and leave out the environment section,
/// which would otherwise print SMTP credentials. Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Install the global subscriber for `environment`.
///
/// Returns `false` when a subscriber was already installed, which happens in
/// tests that share a process.
pub fn init_tracing(environment: &Environment) -> bool {
    let filter = filter_for(environment);

    let installed = match environment {
        Environment::Production => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init(),
        Environment::Development => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init(),
    }
    .is_ok();

    if installed {
        info!(environment = ?environment, "Tracing initialized");
    } else {
        debug!("Tracing already initialized");
    }
    installed
}
