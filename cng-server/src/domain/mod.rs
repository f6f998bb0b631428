//! Domain types for the CNG station finder.
//!
//! These types represent validated station data. Identifiers, ratings and
//! clock times enforce their invariants at construction time, and a
//! [`Station`] keeps its aggregate rating consistent with its reviews.

mod amenity;
mod error;
mod hours;
mod review;
mod station;

pub use amenity::{Facility, PaymentMethod};
pub use error::UnknownVariant;
pub use hours::{ClockTime, InvalidClockTime, OperatingHours};
pub use review::{InvalidStarRating, Review, StarRating, aggregate_rating};
pub use station::{Coordinate, EARTH_RADIUS_KM, InvalidStationId, Station, StationId, StationStatus};
