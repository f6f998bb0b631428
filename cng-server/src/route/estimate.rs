//! Mocked journey overview figures.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::config::RouteConfig;
use super::plan::RoutePlan;

/// Distance, time, fuel and cost for a planned route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteEstimate {
    pub distance_km: u32,
    pub duration_mins: u32,
    /// Fuel needed, to one decimal place.
    pub cng_usage_kg: f64,
    /// Whole currency units.
    pub estimated_cost: u32,
}

impl RouteEstimate {
    /// Duration as "Hh Mm".
    pub fn duration_label(&self) -> String {
        format!("{}h {}m", self.duration_mins / 60, self.duration_mins % 60)
    }
}

/// Produces route estimates from an injected random source.
#[derive(Debug, Clone)]
pub struct RouteEstimator<R> {
    rng: R,
    config: RouteConfig,
}

impl RouteEstimator<ChaCha8Rng> {
    /// Create a reproducible estimator from a seed.
    pub fn seeded(seed: u64, config: RouteConfig) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> RouteEstimator<R> {
    pub fn new(rng: R, config: RouteConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Estimate `plan`, or `None` until both endpoints are set.
    ///
    /// The distance is drawn at random; there is no routing engine.
    pub fn estimate(&mut self, plan: &RoutePlan) -> Option<RouteEstimate> {
        if !plan.is_ready() {
            return None;
        }

        let range = self.config.distance_range_km.clone();
        let distance_km = if range.is_empty() {
            range.start
        } else {
            self.rng.gen_range(range)
        };
        let estimate = self.from_distance(distance_km);
        debug!(
            distance_km,
            waypoints = plan.waypoints().len(),
            "route estimated"
        );
        Some(estimate)
    }

    /// Derive time, fuel and cost from a known distance.
    pub fn from_distance(&self, distance_km: u32) -> RouteEstimate {
        let distance = f64::from(distance_km);
        let duration_mins = (distance * 60.0 / self.config.avg_speed_kmh).floor() as u32;
        let cng_usage_kg = (distance * self.config.consumption_kg_per_km * 10.0).round() / 10.0;
        let estimated_cost = (cng_usage_kg * self.config.fuel_price_per_kg).round() as u32;

        RouteEstimate {
            distance_km,
            duration_mins,
            cng_usage_kg,
            estimated_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator(seed: u64) -> RouteEstimator<ChaCha8Rng> {
        RouteEstimator::seeded(seed, RouteConfig::default())
    }

    #[test]
    fn no_estimate_without_endpoints() {
        let mut e = estimator(1);
        assert!(e.estimate(&RoutePlan::new("Pune", "")).is_none());
        assert!(e.estimate(&RoutePlan::default()).is_none());
    }

    #[test]
    fn figures_from_distance() {
        let e = estimator(1);
        let est = e.from_distance(250);

        assert_eq!(est.distance_km, 250);
        assert_eq!(est.duration_mins, 250);
        assert_eq!(est.cng_usage_kg, 12.5);
        assert_eq!(est.estimated_cost, 750);
        assert_eq!(est.duration_label(), "4h 10m");
    }

    #[test]
    fn usage_rounds_to_one_decimal() {
        let config = RouteConfig::new(60.0, 0.037, 60.0, 50..550);
        let e = RouteEstimator::seeded(1, config);
        // 123 km * 0.037 = 4.551 kg
        let est = e.from_distance(123);
        assert_eq!(est.cng_usage_kg, 4.6);
        assert_eq!(est.estimated_cost, 276);
    }

    #[test]
    fn slower_speed_takes_longer() {
        let config = RouteConfig::new(40.0, 0.05, 60.0, 50..550);
        let e = RouteEstimator::seeded(1, config);
        // 100 km at 40 km/h = 150 minutes
        assert_eq!(e.from_distance(100).duration_mins, 150);
    }

    #[test]
    fn random_distance_within_range() {
        let mut e = estimator(3);
        let plan = RoutePlan::new("Chennai", "Bangalore");
        for _ in 0..500 {
            let est = e.estimate(&plan).unwrap();
            assert!((50..550).contains(&est.distance_km));
            assert_eq!(est.duration_mins, est.distance_km);
        }
    }

    #[test]
    fn empty_range_uses_its_start() {
        let config = RouteConfig::new(60.0, 0.05, 60.0, 120..120);
        let mut e = RouteEstimator::seeded(0, config);
        let est = e.estimate(&RoutePlan::new("A", "B")).unwrap();
        assert_eq!(est.distance_km, 120);
    }

    #[test]
    fn seeded_estimates_repeat() {
        let plan = RoutePlan::new("Kolkata", "Lucknow");
        let a = estimator(8).estimate(&plan);
        let b = estimator(8).estimate(&plan);
        assert_eq!(a, b);
    }
}
