//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Provides structured error responses following the Problem Details
//! standard. See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use skyroute_lib::Error as LibError;

/// Problem type URI for unknown airport codes.
pub const PROBLEM_UNKNOWN_AIRPORT: &str = "/problems/unknown-airport";

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// RFC 9457 Problem Details response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Create a 400 Bad Request problem for invalid input.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
    }

    /// Create a 404 Not Found problem for unknown airport codes.
    pub fn unknown_airport(detail: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_UNKNOWN_AIRPORT,
            "Unknown Airport",
            StatusCode::NOT_FOUND,
        )
        .with_detail(detail)
    }

    /// Create a 500 Internal Server Error problem.
    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );
        *response.status_mut() = status;
        response
    }
}

/// Convert library errors to ProblemDetails.
pub fn from_lib_error(error: &LibError) -> ProblemDetails {
    match error {
        LibError::UnknownAirport { .. } => ProblemDetails::unknown_airport(error.to_string()),
        _ => ProblemDetails::internal_error(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_sets_status_and_detail() {
        let problem = ProblemDetails::bad_request("max_legs out of range");
        assert_eq!(problem.status, 400);
        assert_eq!(problem.type_uri, PROBLEM_INVALID_REQUEST);
        assert_eq!(problem.detail.as_deref(), Some("max_legs out of range"));
    }

    #[test]
    fn unknown_airport_maps_from_lib_error() {
        let error = LibError::UnknownAirport {
            code: "ZZZZ".to_string(),
            suggestions: vec![],
        };
        let problem = from_lib_error(&error);
        assert_eq!(problem.status, 404);
        assert_eq!(problem.type_uri, PROBLEM_UNKNOWN_AIRPORT);
        assert!(problem.detail.as_deref().unwrap().contains("ZZZZ"));
    }

    #[test]
    fn serialization_uses_the_type_field_name() {
        let problem = ProblemDetails::bad_request("oops");
        let json = serde_json::to_string(&problem).unwrap();
        assert!(json.contains("\"type\":\"/problems/invalid-request\""));
        assert!(json.contains("\"status\":400"));
    }
}
