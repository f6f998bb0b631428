use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cng_server::config::AppConfig;
use cng_server::repository::StationDirectory;
use cng_server::route::{RouteConfig, RouteEstimator};
use cng_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cng_server=info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Same seed, same stations and same route figures
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, station_count = config.station_count, "generating stations");

    let directory = StationDirectory::generate(
        config.station_count,
        ChaCha8Rng::seed_from_u64(seed),
        Utc::now(),
    )?;
    let estimator = RouteEstimator::seeded(seed.wrapping_add(1), RouteConfig::default());

    let state = AppState::new(directory, estimator);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "CNG station finder listening");
    info!("GET  /health               - Health check");
    info!("GET  /api/stations         - Search and filter stations");
    info!("GET  /api/stations/nearby  - Stations near a point");
    info!("GET  /api/stations/:id     - Station detail");
    info!("POST /api/route/estimate   - Route estimate");
    info!("GET  /api/filters          - Filter options");

    axum::serve(listener, app).await?;
    Ok(())
}
