//! The session's canonical station collection.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{info, warn};

use crate::domain::{Station, StationId};
use crate::query::{NearbyQuery, NearbyStation, StationFilter, filter_stations, nearby_stations};

use super::error::RepositoryError;
use super::generator::StationGenerator;

/// Owns the station collection for the lifetime of the process.
///
/// The collection is built once and never mutated afterwards, so it can be
/// shared freely between readers.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: Vec<Station>,
    /// Position of each station in `stations`, keyed by id.
    index: HashMap<StationId, usize>,
}

impl StationDirectory {
    /// Wrap an existing collection. Ids are unique: later stations that
    /// repeat an earlier id are dropped.
    pub fn new(stations: Vec<Station>) -> Self {
        let mut index = HashMap::with_capacity(stations.len());
        let mut unique = Vec::with_capacity(stations.len());
        for station in stations {
            if index.contains_key(&station.id) {
                warn!(id = %station.id, "dropping station with duplicate id");
                continue;
            }
            index.insert(station.id.clone(), unique.len());
            unique.push(station);
        }
        Self {
            stations: unique,
            index,
        }
    }

    /// Generate `count` mock stations from `rng`.
    pub fn generate<R: Rng>(
        count: i64,
        rng: R,
        now: DateTime<Utc>,
    ) -> Result<Self, RepositoryError> {
        let stations = StationGenerator::new(rng, now).generate(count)?;
        info!(count = stations.len(), "station directory ready");
        Ok(Self::new(stations))
    }

    /// Every station, in generation order.
    pub fn all(&self) -> &[Station] {
        &self.stations
    }

    pub fn get(&self, id: &StationId) -> Option<&Station> {
        self.index.get(id).map(|&pos| &self.stations[pos])
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations matching `search` and `filter`, in directory order.
    pub fn search(&self, search: &str, filter: &StationFilter) -> Vec<&Station> {
        filter_stations(&self.stations, search, filter)
    }

    /// Stations near a point, nearest first.
    pub fn nearby(&self, query: &NearbyQuery) -> Vec<NearbyStation<'_>> {
        nearby_stations(&self.stations, query)
    }
}
