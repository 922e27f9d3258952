//! Life service binary.
//!
//! Wires the configuration, logging, simulation session and HTTP server
//! together and serves `GET /nextstate` until interrupted.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `life-config.yaml` (or `$LIFE_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Seed the population RNG and build the simulation session
//! 4. Serve HTTP until Ctrl-C / SIGTERM
//! 5. Log shutdown

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use life_core::config::{LifeConfig, LogFormat, LoggingConfig};
use life_core::{Simulation, seed_rng};
use life_server::{AppState, ServerConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "life-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, session construction, or the
/// server fails.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config_path = config_path();
    let config = load_config(&config_path)?;

    init_tracing(&config.logging);
    info!(path = %config_path.display(), found = config_path.exists(), "Configuration loaded");

    if let Err(e) = run(config).await {
        error!(error = %e, "life service failed");
        return Err(e);
    }

    info!("life service shutdown complete");
    Ok(())
}

async fn run(config: LifeConfig) -> Result<(), AppError> {
    let (mut rng, seed) = seed_rng(config.world.seed);
    info!(seed, "Population RNG seeded");

    let simulation = Simulation::from_config(&config.world, &mut rng)?;
    let state = Arc::new(AppState::new(simulation));

    let server_config = ServerConfig::from(&config.server);
    life_server::start_server(&server_config, state, shutdown_signal()).await?;
    Ok(())
}

/// Resolve the config file path from `LIFE_CONFIG`, falling back to the default.
fn config_path() -> PathBuf {
    std::env::var_os("LIFE_CONFIG").map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load the configuration, using defaults when the file does not exist.
fn load_config(path: &Path) -> Result<LifeConfig, AppError> {
    if path.exists() {
        Ok(LifeConfig::from_file(path)?)
    } else {
        let mut config = LifeConfig::default();
        config.server.apply_env_overrides();
        Ok(config)
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level`.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Resolve when the process receives Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining requests");
}
