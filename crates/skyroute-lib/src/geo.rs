//! Great-circle distance between geographic coordinates.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Geographic position of an airport in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    /// Haversine great-circle distance to another position, in kilometres.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_between_identical_positions() {
        let p = GeoPosition {
            latitude: 51.4706,
            longitude: -0.461941,
        };
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn london_to_paris_is_roughly_350_km() {
        let lhr = GeoPosition {
            latitude: 51.4706,
            longitude: -0.461941,
        };
        let cdg = GeoPosition {
            latitude: 49.012798,
            longitude: 2.55,
        };
        let d = lhr.distance_to(&cdg);
        assert!((330.0..370.0).contains(&d), "unexpected distance {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPosition {
            latitude: 40.6398,
            longitude: -73.7789,
        };
        let b = GeoPosition {
            latitude: 33.9425,
            longitude: -118.408,
        };
        let forward = a.distance_to(&b);
        let backward = b.distance_to(&a);
        assert!((forward - backward).abs() < 1e-9);
    }
}
