//! Web layer for the CNG station finder.
//!
//! Provides JSON endpoints for listing, filtering and locating stations and
//! for sketching a refuelling route.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
