//! CSV dataset loading and graph construction.
//!
//! The loader consumes OpenFlights-style flat files: `airports.csv` with the
//! IATA, ICAO, latitude, and longitude columns, and `routes.csv` with source
//! and destination IATA columns. Scheduled edge weights are the great-circle
//! distance between the two endpoints. Routes referencing airports missing
//! from the airport list are skipped with a warning rather than propagated
//! as corrupt edges.

use std::path::Path;

use tracing::{debug, warn};

use crate::airport::{Airport, AirportIndex};
use crate::error::{Error, Result};
use crate::geo::GeoPosition;
use crate::graph::{build_perimeter_graph, Graph};
use crate::routing::FlightNetwork;

/// Default perimeter search radius in kilometres.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 200.0;

/// Airports file name expected inside the data directory.
pub const AIRPORTS_FILE: &str = "airports.csv";

/// Routes file name expected inside the data directory.
pub const ROUTES_FILE: &str = "routes.csv";

// 0-based column positions in the OpenFlights exports.
const AIRPORT_IATA: usize = 4;
const AIRPORT_ICAO: usize = 5;
const AIRPORT_LATITUDE: usize = 6;
const AIRPORT_LONGITUDE: usize = 7;
const ROUTE_SOURCE: usize = 2;
const ROUTE_DEST: usize = 4;

/// Load the airport list from `airports.csv`.
///
/// Records without an IATA code cannot participate in routing and are
/// dropped. An empty or `\N` ICAO column is recorded as no ICAO code.
pub fn load_airports(path: &Path) -> Result<Vec<Airport>> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut airports = Vec::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let iata = field(&record, AIRPORT_IATA, path, line)?;
        if iata.is_empty() || iata == "\\N" {
            skipped += 1;
            continue;
        }

        let icao = match field(&record, AIRPORT_ICAO, path, line)? {
            "" | "\\N" => None,
            code => Some(code.to_string()),
        };
        let latitude = parse_coordinate(&record, AIRPORT_LATITUDE, path, line)?;
        let longitude = parse_coordinate(&record, AIRPORT_LONGITUDE, path, line)?;

        airports.push(Airport {
            iata: iata.to_string(),
            icao,
            position: GeoPosition {
                latitude,
                longitude,
            },
        });
    }

    debug!(
        loaded = airports.len(),
        skipped,
        path = %path.display(),
        "loaded airports"
    );
    Ok(airports)
}

/// Load the scheduled route graph from `routes.csv`.
///
/// Duplicate edges keep the first computed weight; edges naming an unknown
/// airport are skipped.
pub fn load_route_graph(path: &Path, airports: &AirportIndex) -> Result<Graph> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut routes = Graph::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let source = field(&record, ROUTE_SOURCE, path, line)?;
        let dest = field(&record, ROUTE_DEST, path, line)?;

        let (Some(source_airport), Some(dest_airport)) =
            (airports.by_iata(source), airports.by_iata(dest))
        else {
            warn!(source, dest, line, "skipping route with unknown airport");
            continue;
        };

        let weight = source_airport.position.distance_to(&dest_airport.position);
        routes.add_edge_if_absent(&source_airport.iata, &dest_airport.iata, weight);
    }

    debug!(edges = routes.edge_count(), path = %path.display(), "loaded route graph");
    Ok(routes)
}

/// Load the full network from `airports.csv` and `routes.csv` inside
/// `data_dir`, building the perimeter graph with the given search radius.
pub fn load_network(data_dir: &Path, radius_km: f64) -> Result<FlightNetwork> {
    let airports = AirportIndex::new(load_airports(&data_dir.join(AIRPORTS_FILE))?);
    let routes = load_route_graph(&data_dir.join(ROUTES_FILE), &airports)?;
    let perimeter = build_perimeter_graph(&airports, &routes, radius_km);

    debug!(
        airports = airports.len(),
        route_edges = routes.edge_count(),
        perimeter_edges = perimeter.edge_count(),
        radius_km,
        "built flight network"
    );
    Ok(FlightNetwork::new(airports, routes, perimeter))
}

fn field<'r>(
    record: &'r csv::StringRecord,
    column: usize,
    path: &Path,
    line: u64,
) -> Result<&'r str> {
    record.get(column).ok_or_else(|| Error::MalformedRecord {
        path: path.to_path_buf(),
        line,
        message: format!("missing column {column}"),
    })
}

fn parse_coordinate(
    record: &csv::StringRecord,
    column: usize,
    path: &Path,
    line: u64,
) -> Result<f64> {
    let raw = field(record, column, path, line)?;
    raw.parse().map_err(|_| Error::MalformedRecord {
        path: path.to_path_buf(),
        line,
        message: format!("invalid coordinate '{raw}' in column {column}"),
    })
}
