use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use parking_engine::api::{AppState, create_router};
use parking_engine::clock::SystemClock;
use parking_engine::config::ConfigLoader;
use parking_engine::lot::ParkingLot;

/// Where the lot and tariff YAML files live unless overridden.
const DEFAULT_CONFIG_DIR: &str = "./config/alke";

/// Listen address unless overridden.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("PARKING_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let bind_addr =
        std::env::var("PARKING_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = match bind_addr.parse() {
        Ok(addr) => addr,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Invalid bind address");
            return ExitCode::FAILURE;
        }
    };

    let lot = ParkingLot::from_config(&config, Arc::new(SystemClock));
    info!(
        lot = %lot.name(),
        max_capacity = lot.max_capacity(),
        "Parking lot ready"
    );

    let app = create_router(AppState::new(lot));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!("Listening on http://{addr}");

    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
