//! Constants for mocked route estimates.

use std::ops::Range;

/// Assumptions used to turn a route distance into time, fuel and cost.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteConfig {
    /// Average driving speed (km/h).
    pub avg_speed_kmh: f64,

    /// CNG consumption (kg per km).
    pub consumption_kg_per_km: f64,

    /// Fuel price used for cost estimates (per kg).
    pub fuel_price_per_kg: f64,

    /// Range the mocked route distance is drawn from (km).
    /// There is no routing engine, so distances are random.
    pub distance_range_km: Range<u32>,
}

impl RouteConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        avg_speed_kmh: f64,
        consumption_kg_per_km: f64,
        fuel_price_per_kg: f64,
        distance_range_km: Range<u32>,
    ) -> Self {
        Self {
            avg_speed_kmh,
            consumption_kg_per_km,
            fuel_price_per_kg,
            distance_range_km,
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            avg_speed_kmh: 60.0,
            consumption_kg_per_km: 0.05,
            fuel_price_per_kg: 60.0,
            distance_range_km: 50..550,
        }
    }
}
