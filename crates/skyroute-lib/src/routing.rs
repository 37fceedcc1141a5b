//! Constrained shortest-route search over the flight network.
//!
//! The search is Dijkstra with two modifications: a cap on the number of
//! scheduled legs, and optional perimeter (ground transfer) edges that are
//! gated off the start and destination nodes. Each query allocates its own
//! frontier and predecessor map, so concurrent queries over one immutable
//! [`FlightNetwork`] need no coordination.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::airport::AirportIndex;
use crate::error::Result;
use crate::graph::{EdgeKind, Graph};
use crate::heap::IndexedHeap;

/// Default cap on the number of scheduled legs in a route.
pub const DEFAULT_MAX_LEGS: u32 = 4;

/// Sentinel rendering for a query that no permitted path satisfies.
pub const NO_ROUTE: &str = "No route.";

/// A single shortest-route query.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    /// Start airport, IATA or ICAO code.
    pub start: String,
    /// Destination airport, IATA or ICAO code.
    pub dest: String,
    /// Maximum number of scheduled legs.
    pub max_legs: u32,
    /// Allow ground transfers between intermediate airports.
    pub check_perimeter: bool,
}

impl RouteQuery {
    pub fn new(start: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            dest: dest.into(),
            max_legs: DEFAULT_MAX_LEGS,
            check_perimeter: false,
        }
    }

    pub fn with_max_legs(mut self, max_legs: u32) -> Self {
        self.max_legs = max_legs;
        self
    }

    pub fn with_perimeter(mut self, check_perimeter: bool) -> Self {
        self.check_perimeter = check_perimeter;
        self
    }
}

/// How the currently-best-known path reaches an airport. Overwritten only by
/// a strictly shorter tentative distance.
#[derive(Debug, Clone)]
struct Predecessor {
    /// Airport the path arrives from; `None` marks the start sentinel.
    via: Option<String>,
    /// Scheduled legs used to get here.
    legs: u32,
    kind: EdgeKind,
}

/// One airport along a planned route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    pub code: String,
    /// Edge kind used to arrive here; `None` for the starting airport.
    pub inbound: Option<EdgeKind>,
}

/// A computed route, rendered as codes joined by `->` (flight) and `=>`
/// (ground transfer) delimiters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub steps: Vec<RouteStep>,
    /// Total weight of the route in kilometres.
    pub distance: f64,
}

impl RoutePlan {
    /// Number of scheduled legs in the route.
    pub fn flights(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.inbound == Some(EdgeKind::Flight))
            .count()
    }

    /// Number of ground transfers in the route.
    pub fn transfers(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.inbound == Some(EdgeKind::Ground))
            .count()
    }
}

impl fmt::Display for RoutePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            if let Some(kind) = step.inbound {
                f.write_str(kind.delimiter())?;
            }
            f.write_str(&step.code)?;
        }
        Ok(())
    }
}

/// Immutable flight network: the airports plus the scheduled and perimeter
/// graphs over them. Refreshing the underlying data means building a new
/// instance and swapping it in, never mutating this one.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    airports: AirportIndex,
    routes: Graph,
    perimeter: Graph,
}

impl FlightNetwork {
    pub fn new(airports: AirportIndex, routes: Graph, perimeter: Graph) -> Self {
        Self {
            airports,
            routes,
            perimeter,
        }
    }

    pub fn airports(&self) -> &AirportIndex {
        &self.airports
    }

    pub fn routes(&self) -> &Graph {
        &self.routes
    }

    pub fn perimeter(&self) -> &Graph {
        &self.perimeter
    }

    /// Compute the lowest-weight route satisfying the query constraints.
    ///
    /// Unknown start or destination codes are an error; a well-formed query
    /// that no permitted path satisfies is `Ok(None)`. A query from an
    /// airport to itself has no scheduled segment and is reported as
    /// `Ok(None)` as well.
    pub fn plan(&self, query: &RouteQuery) -> Result<Option<RoutePlan>> {
        let start = self.airports.resolve(&query.start)?.to_string();
        let dest = self.airports.resolve(&query.dest)?.to_string();

        debug!(
            start = %start,
            dest = %dest,
            max_legs = query.max_legs,
            check_perimeter = query.check_perimeter,
            "planning route"
        );

        let mut frontier = IndexedHeap::with_capacity(self.airports.len());
        let mut previous: HashMap<String, Predecessor> = HashMap::new();

        for airport in self.airports.iter() {
            frontier.insert(airport.iata.clone(), f64::INFINITY);
        }
        frontier.decrease_key(&start, 0.0);
        previous.insert(
            start.clone(),
            Predecessor {
                via: None,
                legs: 0,
                kind: EdgeKind::Flight,
            },
        );

        let mut total = f64::INFINITY;
        while let Some((current, distance)) = frontier.pop_min() {
            if current == dest {
                total = distance;
                break;
            }

            // A node popped at +infinity was never reached; it has no
            // predecessor record and nothing to relax.
            let Some(legs) = previous.get(&current).map(|record| record.legs) else {
                continue;
            };
            if legs == query.max_legs {
                continue;
            }

            for (next, weight) in self.routes.neighbours(&current) {
                if !frontier.contains(next) {
                    continue;
                }
                let candidate = distance + weight;
                if candidate < frontier.priority(next).unwrap_or(f64::INFINITY) {
                    frontier.decrease_key(next, candidate);
                    previous.insert(
                        next.to_string(),
                        Predecessor {
                            via: Some(current.clone()),
                            legs: legs + 1,
                            kind: EdgeKind::Flight,
                        },
                    );
                }
            }

            // Ground transfers never start a route.
            if !query.check_perimeter || current == start {
                continue;
            }

            for (next, weight) in self.perimeter.neighbours(&current) {
                // ...and never end one either.
                if !frontier.contains(next) || next == dest {
                    continue;
                }
                let candidate = distance + weight;
                if candidate < frontier.priority(next).unwrap_or(f64::INFINITY) {
                    frontier.decrease_key(next, candidate);
                    previous.insert(
                        next.to_string(),
                        Predecessor {
                            via: Some(current.clone()),
                            legs,
                            kind: EdgeKind::Ground,
                        },
                    );
                }
            }
        }

        let plan = reconstruct(&previous, &dest).map(|steps| RoutePlan {
            steps,
            distance: total,
        });
        match &plan {
            Some(plan) => debug!(route = %plan, distance = plan.distance, "route found"),
            None => debug!(start = %start, dest = %dest, "no permitted route"),
        }
        Ok(plan)
    }

    /// Render the lowest-weight route as a string, or [`NO_ROUTE`] when no
    /// permitted path exists.
    pub fn shortest_route(&self, query: &RouteQuery) -> Result<String> {
        Ok(self
            .plan(query)?
            .map(|plan| plan.to_string())
            .unwrap_or_else(|| NO_ROUTE.to_string()))
    }
}

/// Walk predecessor records backward from the destination. A walk that
/// contains no scheduled segment means the destination was never reached by
/// a permitted path.
fn reconstruct(previous: &HashMap<String, Predecessor>, dest: &str) -> Option<Vec<RouteStep>> {
    let mut steps = Vec::new();
    let mut cursor = Some(dest.to_string());

    while let Some(code) = cursor {
        let record = previous.get(&code)?;
        steps.push(RouteStep {
            inbound: record.via.as_ref().map(|_| record.kind),
            code,
        });
        cursor = record.via.clone();
    }

    steps.reverse();
    if steps.iter().any(|step| step.inbound == Some(EdgeKind::Flight)) {
        Some(steps)
    } else {
        None
    }
}
