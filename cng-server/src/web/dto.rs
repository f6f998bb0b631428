//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Facility, PaymentMethod, Review, Station, StationStatus};
use crate::query::NearbyStation;
use crate::route::{RouteEstimate, Waypoint};

/// Query string for the station list.
#[derive(Debug, Default, Deserialize)]
pub struct StationListRequest {
    /// Free-text search over name, address and city
    pub q: Option<String>,

    /// Required status (e.g. "available")
    pub status: Option<String>,

    /// Price ceiling per kg, inclusive
    pub max_price: Option<f64>,

    /// Comma-separated required facilities (e.g. "food,coffee")
    pub facilities: Option<String>,

    /// Comma-separated required payment methods (e.g. "upi,wallet")
    pub payment_methods: Option<String>,
}

/// A station as shown on list cards and map markers.
#[derive(Debug, Serialize)]
pub struct StationSummary {
    pub id: String,
    pub name: String,
    pub company: String,
    pub address: String,
    pub city: String,
    pub region: String,
    pub lat: f64,
    pub lng: f64,
    pub status: StationStatus,
    pub status_label: &'static str,
    pub wait_label: String,
    pub waiting_time_mins: u32,
    pub price_per_kg: f64,
    pub rating: f64,
    pub review_count: usize,
    /// "24 Hours" or "HH:MM - HH:MM"
    pub hours: String,
    pub facilities: Vec<Facility>,
    pub payment_methods: Vec<PaymentMethod>,
}

impl StationSummary {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            company: station.company.clone(),
            address: station.address.clone(),
            city: station.city.clone(),
            region: station.region.clone(),
            lat: station.location.lat,
            lng: station.location.lng,
            status: station.status,
            status_label: station.status.label(),
            wait_label: station.wait_label(),
            waiting_time_mins: station.waiting_time_mins,
            price_per_kg: station.price_per_kg,
            rating: station.rating(),
            review_count: station.review_count(),
            hours: station.operating_hours.label(),
            facilities: station.facilities.iter().copied().collect(),
            payment_methods: station.payment_methods().iter().copied().collect(),
        }
    }
}

/// Response for the station list.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Number of matching stations
    pub count: usize,

    /// Matching stations in directory order
    pub stations: Vec<StationSummary>,
}

/// A review on the station detail panel.
#[derive(Debug, Serialize)]
pub struct ReviewResult {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub rating: u8,
    pub comment: String,
    /// Date as YYYY-MM-DD
    pub date: String,
    pub helpful: u32,
}

impl ReviewResult {
    pub fn from_review(review: &Review) -> Self {
        Self {
            id: review.id.clone(),
            user_id: review.user_id.clone(),
            username: review.username.clone(),
            rating: review.rating.get(),
            comment: review.comment.clone(),
            date: review.date.format("%Y-%m-%d").to_string(),
            helpful: review.helpful,
        }
    }
}

/// Full station detail.
#[derive(Debug, Serialize)]
pub struct StationDetailResponse {
    #[serde(flatten)]
    pub summary: StationSummary,

    /// Status badge text (e.g. "Busy (12 min wait)")
    pub status_summary: String,

    /// Opening time, HH:MM
    pub opens: String,

    /// Closing time, HH:MM
    pub closes: String,

    /// RFC 3339 timestamp
    pub last_updated: String,

    pub reviews: Vec<ReviewResult>,
}

impl StationDetailResponse {
    pub fn from_station(station: &Station) -> Self {
        Self {
            summary: StationSummary::from_station(station),
            status_summary: station.status_summary(),
            opens: station.operating_hours.open.to_string(),
            closes: station.operating_hours.close.to_string(),
            last_updated: station.last_updated.to_rfc3339(),
            reviews: station.reviews().iter().map(ReviewResult::from_review).collect(),
        }
    }
}

/// Query string for nearby stations.
#[derive(Debug, Deserialize)]
pub struct NearbyRequest {
    pub lat: f64,
    pub lng: f64,

    /// Search radius in km (clamped to 1-20, default 5)
    pub radius_km: Option<f64>,

    /// Maximum number of results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A station near the requested point.
#[derive(Debug, Serialize)]
pub struct NearbyResult {
    pub station: StationSummary,

    /// Distance in km, rounded to 2 decimal places
    pub distance_km: f64,
}

impl NearbyResult {
    pub fn from_nearby(nearby: &NearbyStation<'_>) -> Self {
        Self {
            station: StationSummary::from_station(nearby.station),
            distance_km: (nearby.distance_km * 100.0).round() / 100.0,
        }
    }
}

/// Response for nearby stations.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    /// Radius actually searched, after clamping
    pub radius_km: f64,

    /// Stations nearest first
    pub stations: Vec<NearbyResult>,
}

/// Request to estimate a route.
#[derive(Debug, Deserialize)]
pub struct RouteEstimateRequest {
    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub destination: String,

    /// Station ids to stop at, in order
    #[serde(default)]
    pub waypoints: Vec<String>,
}

/// A stop in the route response.
#[derive(Debug, Serialize)]
pub struct WaypointResult {
    pub station_id: String,
    pub name: String,
}

impl WaypointResult {
    pub fn from_waypoint(waypoint: &Waypoint) -> Self {
        Self {
            station_id: waypoint.station_id.to_string(),
            name: waypoint.name.clone(),
        }
    }
}

/// Journey overview figures.
#[derive(Debug, Serialize)]
pub struct EstimateResult {
    pub distance_km: u32,
    pub duration_mins: u32,
    /// "Hh Mm"
    pub duration_label: String,
    pub cng_usage_kg: f64,
    pub estimated_cost: u32,
}

impl EstimateResult {
    pub fn from_estimate(estimate: &RouteEstimate) -> Self {
        Self {
            distance_km: estimate.distance_km,
            duration_mins: estimate.duration_mins,
            duration_label: estimate.duration_label(),
            cng_usage_kg: estimate.cng_usage_kg,
            estimated_cost: estimate.estimated_cost,
        }
    }
}

/// Response for a route estimate.
#[derive(Debug, Serialize)]
pub struct RouteEstimateResponse {
    /// Stops with duplicates removed
    pub waypoints: Vec<WaypointResult>,

    /// Absent until both origin and destination are given
    pub estimate: Option<EstimateResult>,
}

/// A selectable filter value and its label.
#[derive(Debug, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Everything the filter panel offers.
#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub statuses: Vec<FilterOption>,
    pub facilities: Vec<FilterOption>,
    pub payment_methods: Vec<FilterOption>,
}

impl FilterOptionsResponse {
    pub fn all() -> Self {
        Self {
            statuses: StationStatus::ALL
                .iter()
                .map(|s| FilterOption {
                    value: s.as_str(),
                    label: s.label(),
                })
                .collect(),
            facilities: Facility::ALL
                .iter()
                .map(|f| FilterOption {
                    value: f.as_str(),
                    label: f.label(),
                })
                .collect(),
            payment_methods: PaymentMethod::ALL
                .iter()
                .map(|m| FilterOption {
                    value: m.as_str(),
                    label: m.label(),
                })
                .collect(),
        }
    }
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
