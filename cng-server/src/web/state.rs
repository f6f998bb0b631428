//! Application state for the web layer.

use std::sync::Arc;

use rand_chacha::ChaCha8Rng;
use tokio::sync::Mutex;

use crate::repository::StationDirectory;
use crate::route::RouteEstimator;

/// Shared application state.
///
/// The directory is read-only after startup. The estimator owns a random
/// source, so it sits behind a mutex.
#[derive(Clone)]
pub struct AppState {
    /// Station collection for this session
    pub directory: Arc<StationDirectory>,

    /// Mocked route estimates
    pub estimator: Arc<Mutex<RouteEstimator<ChaCha8Rng>>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directory: StationDirectory, estimator: RouteEstimator<ChaCha8Rng>) -> Self {
        Self {
            directory: Arc::new(directory),
            estimator: Arc::new(Mutex::new(estimator)),
        }
    }
}
