//! HTTP route handlers.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{debug, warn};

use crate::domain::{
    Coordinate, Facility, PaymentMethod, Station, StationId, StationStatus, UnknownVariant,
};
use crate::query::{DEFAULT_LIMIT, NearbyQuery, StationFilter};
use crate::route::RoutePlan;

use super::dto::*;
use super::state::AppState;

/// Largest `limit` accepted by the nearby endpoint.
const MAX_NEARBY_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/nearby", get(nearby_stations))
        .route("/api/stations/:id", get(station_detail))
        .route("/api/route/estimate", post(estimate_route))
        .route("/api/filters", get(filter_options))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search and filter the station list.
async fn list_stations(
    State(state): State<AppState>,
    Query(req): Query<StationListRequest>,
) -> Result<Json<StationListResponse>, AppError> {
    let filter = build_filter(&req)?;
    let search = req.q.as_deref().unwrap_or("");

    let stations: Vec<StationSummary> = state
        .directory
        .search(search, &filter)
        .into_iter()
        .map(StationSummary::from_station)
        .collect();

    debug!(
        search,
        active_filters = filter.active_count(),
        matches = stations.len(),
        "listed stations"
    );

    Ok(Json(StationListResponse {
        count: stations.len(),
        stations,
    }))
}

/// Turn the query string into a filter selection.
fn build_filter(req: &StationListRequest) -> Result<StationFilter, AppError> {
    let status: Option<StationStatus> = req
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<StationStatus>)
        .transpose()
        .map_err(bad_variant)?;

    if let Some(price) = req.max_price
        && !(price.is_finite() && price > 0.0)
    {
        return Err(AppError::BadRequest {
            message: format!("Invalid max_price: {price}"),
        });
    }

    let facilities: Vec<Facility> = parse_list(req.facilities.as_deref())?;
    let payment_methods: Vec<PaymentMethod> = parse_list(req.payment_methods.as_deref())?;

    Ok(StationFilter::new()
        .with_status(status)
        .with_max_price(req.max_price)
        .with_facilities(facilities)
        .with_payment_methods(payment_methods))
}

/// Parse a comma-separated list, ignoring blank entries.
fn parse_list<T>(raw: Option<&str>) -> Result<Vec<T>, AppError>
where
    T: FromStr<Err = UnknownVariant>,
{
    raw.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().map_err(bad_variant))
        .collect()
}

fn bad_variant(e: UnknownVariant) -> AppError {
    AppError::BadRequest {
        message: e.to_string(),
    }
}

/// Stations near a point, nearest first.
async fn nearby_stations(
    State(state): State<AppState>,
    Query(req): Query<NearbyRequest>,
) -> Result<Json<NearbyResponse>, AppError> {
    let valid_lat = req.lat.is_finite() && (-90.0..=90.0).contains(&req.lat);
    let valid_lng = req.lng.is_finite() && (-180.0..=180.0).contains(&req.lng);
    if !valid_lat || !valid_lng {
        return Err(AppError::BadRequest {
            message: format!("Invalid coordinates: {}, {}", req.lat, req.lng),
        });
    }

    let mut query = NearbyQuery::new(Coordinate::new(req.lat, req.lng))
        .with_limit(req.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_NEARBY_LIMIT));
    if let Some(radius_km) = req.radius_km {
        query = query.with_radius_km(radius_km);
    }

    let stations = state
        .directory
        .nearby(&query)
        .iter()
        .map(NearbyResult::from_nearby)
        .collect();

    Ok(Json(NearbyResponse {
        radius_km: query.radius_km(),
        stations,
    }))
}

/// Full detail for one station.
async fn station_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StationDetailResponse>, AppError> {
    let station = lookup(&state, &id)?;
    Ok(Json(StationDetailResponse::from_station(station)))
}

/// Look up a station by its raw id.
fn lookup<'a>(state: &'a AppState, raw: &str) -> Result<&'a Station, AppError> {
    StationId::parse(raw)
        .ok()
        .and_then(|id| state.directory.get(&id))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown station: {raw}"),
        })
}

/// Build a route from the request and estimate it.
async fn estimate_route(
    State(state): State<AppState>,
    Json(req): Json<RouteEstimateRequest>,
) -> Result<Json<RouteEstimateResponse>, AppError> {
    let mut plan = RoutePlan::new(req.origin, req.destination);
    for raw in &req.waypoints {
        let station = lookup(&state, raw)?;
        plan.add_waypoint(station);
    }

    let estimate = state.estimator.lock().await.estimate(&plan);

    Ok(Json(RouteEstimateResponse {
        waypoints: plan
            .waypoints()
            .iter()
            .map(WaypointResult::from_waypoint)
            .collect(),
        estimate: estimate.as_ref().map(EstimateResult::from_estimate),
    }))
}

/// Options for the filter panel.
async fn filter_options() -> Json<FilterOptionsResponse> {
    Json(FilterOptionsResponse::all())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
