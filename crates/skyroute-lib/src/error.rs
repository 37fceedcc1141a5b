use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the skyroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a supplied IATA or ICAO code matches no known airport.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a dataset file could not be located at the resolved path.
    #[error("dataset file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when a CSV record is missing one of the columns the loader needs.
    #[error("malformed record at line {line} of {path}: {message}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for snapshot serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
