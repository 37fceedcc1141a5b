//! HTTP glue for the skyroute flight network.
//!
//! The service follows a thin-handler pattern: all routing logic lives in
//! `skyroute-lib`, and the handlers here only parse and validate parameters,
//! call the library, and shape the response.
//!
//! # Endpoints
//!
//! - `GET /api/v1/route/{from}/{to}` - Compute the cheapest route
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe

#![deny(warnings)]

pub mod problem;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::info;

use skyroute_lib::{FlightNetwork, RouteQuery, DEFAULT_MAX_LEGS, NO_ROUTE};

use crate::problem::{from_lib_error, ProblemDetails};

/// Upper bound on the leg cap accepted by the API.
const MAX_LEGS_LIMIT: u32 = 12;

/// Shared application state: the immutable flight network.
///
/// Reloading the dataset means constructing a new `AppState` and swapping it
/// in; in-flight queries keep the `Arc` they started with.
#[derive(Clone)]
pub struct AppState {
    network: Arc<FlightNetwork>,
}

impl AppState {
    pub fn new(network: FlightNetwork) -> Self {
        Self {
            network: Arc::new(network),
        }
    }

    pub fn network(&self) -> &FlightNetwork {
        &self.network
    }
}

/// Query-string parameters for the route endpoint.
#[derive(Debug, Deserialize)]
pub struct RouteParams {
    max_legs: Option<u32>,
    check_perimeter: Option<bool>,
}

/// Route response returned to the caller.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Rendered path, codes joined by `->` and `=>`, or the no-route
    /// sentinel.
    pub route: String,
    /// Whether any permitted path was found.
    pub found: bool,
    /// Number of scheduled legs in the route.
    pub flights: usize,
    /// Number of ground transfers in the route.
    pub transfers: usize,
    /// Total route weight in kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/route/{from}/{to}", get(route_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_handler(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
    Query(params): Query<RouteParams>,
) -> axum::response::Response {
    if let Err(problem) = validate(&from, &to, &params) {
        return problem.into_response();
    }

    let query = RouteQuery::new(from, to)
        .with_max_legs(params.max_legs.unwrap_or(DEFAULT_MAX_LEGS))
        .with_perimeter(params.check_perimeter.unwrap_or(false));

    let plan = match state.network().plan(&query) {
        Ok(plan) => plan,
        Err(error) => return from_lib_error(&error).into_response(),
    };

    let response = match plan {
        Some(plan) => RouteResponse {
            route: plan.to_string(),
            found: true,
            flights: plan.flights(),
            transfers: plan.transfers(),
            distance_km: Some(plan.distance),
        },
        None => RouteResponse {
            route: NO_ROUTE.to_string(),
            found: false,
            flights: 0,
            transfers: 0,
            distance_km: None,
        },
    };

    info!(
        start = %query.start,
        dest = %query.dest,
        found = response.found,
        route = %response.route,
        "route computed"
    );

    (StatusCode::OK, Json(response)).into_response()
}

fn validate(from: &str, to: &str, params: &RouteParams) -> Result<(), ProblemDetails> {
    for code in [from, to] {
        if !(3..=4).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ProblemDetails::bad_request(format!(
                "airport code '{code}' must be 3 or 4 alphanumeric characters"
            )));
        }
    }

    if let Some(max_legs) = params.max_legs {
        if !(1..=MAX_LEGS_LIMIT).contains(&max_legs) {
            return Err(ProblemDetails::bad_request(format!(
                "max_legs must be between 1 and {MAX_LEGS_LIMIT}"
            )));
        }
    }

    Ok(())
}

async fn health_live() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "live" }))
}

async fn health_ready(State(state): State<AppState>) -> axum::response::Response {
    if state.network().airports().is_empty() {
        return ProblemDetails::internal_error("flight network is empty").into_response();
    }
    Json(serde_json::json!({ "status": "ready" })).into_response()
}
