//! Versioned snapshot of the precomputed network.
//!
//! Building the perimeter graph is quadratic in the number of airports, so
//! the assembled model is persisted beside the CSVs. The snapshot records
//! the search radius it was built with; it is reused only when that radius
//! matches the requested one, otherwise the network is rebuilt from source
//! and the snapshot rewritten. A corrupt snapshot is discarded and rebuilt.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::airport::{Airport, AirportIndex};
use crate::dataset::load_network;
use crate::error::Result;
use crate::graph::Graph;
use crate::routing::FlightNetwork;

/// Snapshot file name inside the data directory.
pub const SNAPSHOT_FILE: &str = "snapshot.json";

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    radius_km: f64,
    airports: Vec<Airport>,
    routes: Graph,
    perimeter: Graph,
}

/// Path of the snapshot file for a data directory.
pub fn snapshot_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SNAPSHOT_FILE)
}

/// Load the network from a matching snapshot, or rebuild it from the CSVs
/// and persist a fresh snapshot.
pub fn load_or_build(data_dir: &Path, radius_km: f64) -> Result<FlightNetwork> {
    let path = snapshot_path(data_dir);
    if let Some(network) = try_load(&path, radius_km) {
        return Ok(network);
    }
    rebuild(data_dir, radius_km)
}

/// Rebuild the network from the CSVs unconditionally and rewrite the
/// snapshot.
pub fn rebuild(data_dir: &Path, radius_km: f64) -> Result<FlightNetwork> {
    let network = load_network(data_dir, radius_km)?;
    write(&snapshot_path(data_dir), &network, radius_km)?;
    Ok(network)
}

fn try_load(path: &Path, radius_km: f64) -> Option<FlightNetwork> {
    let raw = fs::read_to_string(path).ok()?;
    let snapshot: Snapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(error) => {
            warn!(path = %path.display(), %error, "discarding unreadable snapshot");
            return None;
        }
    };

    if snapshot.radius_km != radius_km {
        debug!(
            snapshot_radius = snapshot.radius_km,
            requested_radius = radius_km,
            "snapshot radius mismatch, rebuilding"
        );
        return None;
    }

    debug!(path = %path.display(), airports = snapshot.airports.len(), "loaded snapshot");
    Some(FlightNetwork::new(
        AirportIndex::new(snapshot.airports),
        snapshot.routes,
        snapshot.perimeter,
    ))
}

fn write(path: &Path, network: &FlightNetwork, radius_km: f64) -> Result<()> {
    let snapshot = Snapshot {
        radius_km,
        airports: network.airports().iter().cloned().collect(),
        routes: network.routes().clone(),
        perimeter: network.perimeter().clone(),
    };
    fs::write(path, serde_json::to_string(&snapshot)?)?;
    debug!(path = %path.display(), radius_km, "wrote snapshot");
    Ok(())
}
