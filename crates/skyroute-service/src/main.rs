//! Flight network routing HTTP service.
//!
//! # Configuration
//!
//! - `SKYROUTE_DATA_DIR` - Directory with airports.csv/routes.csv (default: `./data`)
//! - `SKYROUTE_RADIUS_KM` - Perimeter search radius (default: 200)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use skyroute_lib::snapshot::load_or_build;
use skyroute_lib::DEFAULT_SEARCH_RADIUS_KM;
use skyroute_service::{router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = env::var("SKYROUTE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./data"));
    let radius_km: f64 = env::var("SKYROUTE_RADIUS_KM")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_SEARCH_RADIUS_KM);
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(8080);

    info!(data_dir = %data_dir.display(), radius_km, port, "starting route service");

    let network = load_or_build(&data_dir, radius_km).map_err(|e| {
        error!(error = %e, data_dir = %data_dir.display(), "failed to load flight network");
        e
    })?;

    info!(
        airports = network.airports().len(),
        route_edges = network.routes().edge_count(),
        perimeter_edges = network.perimeter().edge_count(),
        "flight network loaded"
    );

    let app = router(AppState::new(network));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
