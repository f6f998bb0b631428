//! A journey sketch: endpoints plus an ordered list of refuelling stops.

use crate::domain::{Station, StationId};

/// A station chosen as a stop along the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waypoint {
    pub station_id: StationId,
    pub name: String,
}

/// Free-text origin and destination with station waypoints in visiting order.
///
/// Origin and destination are not geocoded; they only gate whether an
/// estimate can be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePlan {
    pub origin: String,
    pub destination: String,
    waypoints: Vec<Waypoint>,
}

impl RoutePlan {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            waypoints: Vec::new(),
        }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Append `station` as the next stop.
    ///
    /// Returns false (and leaves the plan unchanged) if it is already a stop.
    pub fn add_waypoint(&mut self, station: &Station) -> bool {
        if self.contains(&station.id) {
            return false;
        }
        self.waypoints.push(Waypoint {
            station_id: station.id.clone(),
            name: station.name.clone(),
        });
        true
    }

    /// Remove the stop for `id`. Returns false if it wasn't a stop.
    pub fn remove_waypoint(&mut self, id: &StationId) -> bool {
        let before = self.waypoints.len();
        self.waypoints.retain(|w| &w.station_id != id);
        self.waypoints.len() != before
    }

    pub fn contains(&self, id: &StationId) -> bool {
        self.waypoints.iter().any(|w| &w.station_id == id)
    }

    /// Both endpoints are filled in.
    pub fn is_ready(&self) -> bool {
        !self.origin.trim().is_empty() && !self.destination.trim().is_empty()
    }
}
