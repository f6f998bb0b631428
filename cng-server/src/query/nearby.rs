//! Stations close to a point.

use crate::domain::{Coordinate, Station};

/// Smallest and largest search radius offered, in kilometres.
pub const MIN_RADIUS_KM: f64 = 1.0;
pub const MAX_RADIUS_KM: f64 = 20.0;

/// Radius used when the caller doesn't pick one.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// How many nearby stations to list by default.
pub const DEFAULT_LIMIT: usize = 10;

/// Where to search and how far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub origin: Coordinate,
    radius_km: f64,
    pub limit: usize,
}

impl NearbyQuery {
    /// Search around `origin` with the default radius and limit.
    pub fn new(origin: Coordinate) -> Self {
        Self {
            origin,
            radius_km: DEFAULT_RADIUS_KM,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the radius, clamped to 1-20 km. NaN falls back to the default.
    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = if radius_km.is_nan() {
            DEFAULT_RADIUS_KM
        } else {
            radius_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
        };
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

/// A station paired with its distance from the search origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyStation<'a> {
    pub station: &'a Station,
    pub distance_km: f64,
}

/// Stations within the radius, nearest first, at most `limit` of them.
///
/// Stations at equal distance keep their input order.
pub fn nearby_stations<'a>(stations: &'a [Station], query: &NearbyQuery) -> Vec<NearbyStation<'a>> {
    let mut found: Vec<NearbyStation<'a>> = stations
        .iter()
        .map(|station| NearbyStation {
            station,
            distance_km: query.origin.distance_km(&station.location),
        })
        .filter(|n| n.distance_km <= query.radius_km)
        .collect();

    found.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    found.truncate(query.limit);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(index: usize, lat: f64, lng: f64) -> Station {
        Station::new(
            StationId::indexed(index),
            format!("Station {index}"),
            Coordinate::new(lat, lng),
            60.0,
        )
    }

    fn ids(found: &[NearbyStation<'_>]) -> Vec<String> {
        found.iter().map(|n| n.station.id.to_string()).collect()
    }

    #[test]
    fn radius_is_clamped() {
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(NearbyQuery::new(origin).radius_km(), DEFAULT_RADIUS_KM);
        assert_eq!(NearbyQuery::new(origin).with_radius_km(0.2).radius_km(), 1.0);
        assert_eq!(NearbyQuery::new(origin).with_radius_km(55.0).radius_km(), 20.0);
        assert_eq!(NearbyQuery::new(origin).with_radius_km(12.5).radius_km(), 12.5);
        assert_eq!(
            NearbyQuery::new(origin).with_radius_km(f64::NAN).radius_km(),
            DEFAULT_RADIUS_KM
        );
    }

    #[test]
    fn nearest_first_within_radius() {
        // 0.01 degrees of latitude is about 1.1 km
        let stations = vec![
            station(0, 19.03, 72.8777),
            station(1, 19.077, 72.8777),
            station(2, 19.5, 72.8777),
            station(3, 19.096, 72.8777),
        ];
        let query = NearbyQuery::new(Coordinate::new(19.076, 72.8777)).with_radius_km(6.0);

        let found = nearby_stations(&stations, &query);
        assert_eq!(ids(&found), ["station-1", "station-3", "station-0"]);
        assert!(found.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
        assert!(found.iter().all(|n| n.distance_km <= 6.0));
    }

    #[test]
    fn limit_truncates() {
        let stations: Vec<Station> = (0..5).map(|i| station(i, 0.001 * i as f64, 0.0)).collect();
        let query = NearbyQuery::new(Coordinate::new(0.0, 0.0)).with_limit(2);
        assert_eq!(ids(&nearby_stations(&stations, &query)), ["station-0", "station-1"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let stations = vec![station(0, 0.01, 0.0), station(1, -0.01, 0.0)];
        let query = NearbyQuery::new(Coordinate::new(0.0, 0.0));
        assert_eq!(ids(&nearby_stations(&stations, &query)), ["station-0", "station-1"]);
    }

    #[test]
    fn nothing_nearby() {
        let stations = vec![station(0, 28.7041, 77.1025)];
        let query = NearbyQuery::new(Coordinate::new(12.9716, 77.5946));
        assert!(nearby_stations(&stations, &query).is_empty());
    }
}
