//! Airport records and code resolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::GeoPosition;

/// Similarity threshold below which fuzzy matches are discarded.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A single airport loaded from the dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Three-letter IATA code; the primary identifier within a search.
    pub iata: String,
    /// Four-letter ICAO code when the dataset provides one.
    pub icao: Option<String>,
    pub position: GeoPosition,
}

/// Lookup structure over the loaded airports.
///
/// Long (ICAO) codes are resolved to short (IATA) codes here, before any
/// search begins; the graphs and the search itself only ever see IATA codes.
#[derive(Debug, Clone, Default)]
pub struct AirportIndex {
    airports: Vec<Airport>,
    by_iata: HashMap<String, usize>,
    by_icao: HashMap<String, usize>,
}

impl AirportIndex {
    pub fn new(airports: Vec<Airport>) -> Self {
        let mut by_iata = HashMap::new();
        let mut by_icao = HashMap::new();
        for (idx, airport) in airports.iter().enumerate() {
            by_iata.insert(airport.iata.clone(), idx);
            if let Some(icao) = &airport.icao {
                by_icao.insert(icao.clone(), idx);
            }
        }
        Self {
            airports,
            by_iata,
            by_icao,
        }
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Iterate over all loaded airports.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }

    /// Lookup an airport by its exact IATA code.
    pub fn by_iata(&self, code: &str) -> Option<&Airport> {
        self.by_iata.get(code).map(|&idx| &self.airports[idx])
    }

    /// Resolve a supplied code to the IATA code used by the graphs.
    ///
    /// Four-character codes are treated as ICAO and mapped to the matching
    /// airport's IATA code; anything else must be a known IATA code. Unknown
    /// codes are rejected here, before the search starts, with fuzzy
    /// suggestions attached.
    pub fn resolve(&self, code: &str) -> Result<&str> {
        let idx = if code.len() == 4 {
            self.by_icao.get(code)
        } else {
            self.by_iata.get(code)
        };

        match idx {
            Some(&idx) => Ok(self.airports[idx].iata.as_str()),
            None => Err(Error::UnknownAirport {
                code: code.to_string(),
                suggestions: self.fuzzy_matches(code, 3),
            }),
        }
    }

    /// Return up to `limit` known codes similar to `code`, best match first.
    pub fn fuzzy_matches(&self, code: &str, limit: usize) -> Vec<String> {
        let needle = code.to_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .airports
            .iter()
            .flat_map(|airport| {
                std::iter::once(airport.iata.as_str()).chain(airport.icao.as_deref())
            })
            .map(|candidate| (strsim::jaro_winkler(&needle, candidate), candidate))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);
        scored.into_iter().map(|(_, code)| code.to_string()).collect()
    }
}
