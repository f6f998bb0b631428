//! Station repository.
//!
//! Generates the in-memory station collection once at startup and owns it
//! for the rest of the session. There is no persistence: every session
//! starts from a fresh (optionally seeded) collection.

mod directory;
mod error;
mod generator;
mod localities;

pub use directory::StationDirectory;
pub use error::RepositoryError;
pub use generator::{
    FACILITY_ODDS, JITTER_DEGREES, MAX_PRICE_PER_KG, MIN_PRICE_PER_KG, PAYMENT_ODDS,
    StationGenerator,
};
pub use localities::{LOCALITIES, Locality, find_locality};
