//! Station query layer.
//!
//! Reads the station collection and narrows it by search text, filter
//! selection or proximity. Nothing here mutates a station.

mod filter;
mod nearby;
mod search;

pub use filter::StationFilter;
pub use nearby::{
    DEFAULT_LIMIT, DEFAULT_RADIUS_KM, MAX_RADIUS_KM, MIN_RADIUS_KM, NearbyQuery, NearbyStation,
    nearby_stations,
};
pub use search::{StationQuery, filter_stations};
