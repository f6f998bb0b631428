//! Route sketching.
//!
//! Lets a user pick an origin, a destination and refuelling stops, and
//! shows rough distance, time, fuel and cost figures. The figures are
//! mocked: there is no geocoder or routing engine behind them.

mod config;
mod estimate;
mod plan;

pub use config::RouteConfig;
pub use estimate::{RouteEstimate, RouteEstimator};
pub use plan::{RoutePlan, Waypoint};
