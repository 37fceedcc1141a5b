//! Skyroute library entry points.
//!
//! This crate exposes helpers to load a flight network from OpenFlights-style
//! CSV files (with a persisted snapshot of the precomputed graphs), and to
//! answer constrained shortest-route queries over it. Higher-level consumers
//! (CLI, HTTP service) should only depend on the functions exported here
//! instead of reimplementing behavior.

#![deny(warnings)]

pub mod airport;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod heap;
pub mod routing;
pub mod snapshot;

pub use airport::{Airport, AirportIndex};
pub use dataset::{load_network, DEFAULT_SEARCH_RADIUS_KM};
pub use error::{Error, Result};
pub use geo::GeoPosition;
pub use graph::{build_perimeter_graph, EdgeKind, Graph};
pub use heap::IndexedHeap;
pub use routing::{FlightNetwork, RoutePlan, RouteQuery, RouteStep, DEFAULT_MAX_LEGS, NO_ROUTE};
pub use snapshot::load_or_build;
