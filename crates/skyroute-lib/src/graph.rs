//! Adjacency graphs over airport codes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::airport::AirportIndex;

/// Classification for the edge used to reach an airport during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Scheduled edge; counts against the leg cap.
    Flight,
    /// Proximity edge; free of the leg cap but never a first or last segment.
    Ground,
}

impl EdgeKind {
    /// Delimiter used when rendering the segment that arrives via this edge.
    pub fn delimiter(self) -> &'static str {
        match self {
            EdgeKind::Flight => "->",
            EdgeKind::Ground => "=>",
        }
    }
}

/// Weighted directed adjacency keyed by IATA code.
///
/// Two instances exist over the same airport set: the scheduled route graph
/// and the perimeter (proximity) graph. Both are immutable for the lifetime
/// of a [`crate::FlightNetwork`]; a missing entry means "no edge", never a
/// zero-weight edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: HashMap<String, HashMap<String, f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a directed edge, overwriting any existing weight.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), weight);
    }

    /// Insert a directed edge only when none exists yet. Returns whether the
    /// edge was inserted.
    pub fn add_edge_if_absent(&mut self, from: &str, to: &str, weight: f64) -> bool {
        use std::collections::hash_map::Entry;
        match self.adjacency.entry(from.to_string()).or_default().entry(to.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(weight);
                true
            }
        }
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn edge(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from).and_then(|edges| edges.get(to)).copied()
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge(from, to).is_some()
    }

    /// Iterate over the outgoing edges of `from`.
    pub fn neighbours(&self, from: &str) -> impl Iterator<Item = (&str, f64)> {
        self.adjacency
            .get(from)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, &weight)| (to.as_str(), weight)))
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum()
    }
}

/// Build the proximity graph: for every unordered pair of airports with no
/// scheduled edge in either direction and a great-circle distance strictly
/// below `radius_km`, insert edges in both directions.
pub fn build_perimeter_graph(airports: &AirportIndex, routes: &Graph, radius_km: f64) -> Graph {
    let all: Vec<_> = airports.iter().collect();
    let mut perimeter = Graph::new();

    for (i, current) in all.iter().enumerate() {
        for neighbour in all.iter().skip(i + 1) {
            if routes.has_edge(&current.iata, &neighbour.iata)
                || routes.has_edge(&neighbour.iata, &current.iata)
            {
                continue;
            }

            let distance = current.position.distance_to(&neighbour.position);
            if distance < radius_km {
                perimeter.add_edge(&current.iata, &neighbour.iata, distance);
                perimeter.add_edge(&neighbour.iata, &current.iata, distance);
            }
        }
    }

    perimeter
}
