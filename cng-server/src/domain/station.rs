//! Station records and their identifiers.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::amenity::{Facility, PaymentMethod};
use super::error::UnknownVariant;
use super::hours::OperatingHours;
use super::review::{Review, aggregate_rating};

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station identifier.
///
/// Identifiers are opaque non-empty strings without whitespace, such as
/// `station-7`.
///
/// # Examples
///
/// ```
/// use cng_server::domain::StationId;
///
/// let id = StationId::parse("station-7").unwrap();
/// assert_eq!(id.as_str(), "station-7");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("station 7").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStationId {
                reason: "must not contain whitespace",
            });
        }
        Ok(Self(s.to_string()))
    }

    /// Identifier for the station at `index` in a generated collection.
    pub fn indexed(index: usize) -> Self {
        Self(format!("station-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in kilometres (haversine).
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// Current operational state of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationStatus {
    Available,
    Busy,
    Closed,
    Maintenance,
}

impl StationStatus {
    pub const ALL: [StationStatus; 4] = [
        StationStatus::Available,
        StationStatus::Busy,
        StationStatus::Closed,
        StationStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Available => "available",
            StationStatus::Busy => "busy",
            StationStatus::Closed => "closed",
            StationStatus::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StationStatus::Available => "Available",
            StationStatus::Busy => "Busy",
            StationStatus::Closed => "Closed",
            StationStatus::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StationStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("station status", s))
    }
}

/// A CNG fuel station.
///
/// The review list and the derived aggregates are kept private so that
/// `rating()` and `review_count()` always agree with `reviews()`. Payment
/// methods always include cash.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Operating company.
    pub company: String,
    pub address: String,
    pub city: String,
    /// Administrative region (state).
    pub region: String,
    pub location: Coordinate,
    pub status: StationStatus,
    /// Current queue in minutes; only meaningful while busy.
    pub waiting_time_mins: u32,
    pub price_per_kg: f64,
    pub operating_hours: OperatingHours,
    pub facilities: BTreeSet<Facility>,
    pub last_updated: DateTime<Utc>,
    payment_methods: BTreeSet<PaymentMethod>,
    reviews: Vec<Review>,
    rating: f64,
}

impl Station {
    /// Create an available, round-the-clock station with no reviews that
    /// accepts cash only. `price_per_kg` is expected to be positive.
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        location: Coordinate,
        price_per_kg: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            company: String::new(),
            address: String::new(),
            city: String::new(),
            region: String::new(),
            location,
            status: StationStatus::Available,
            waiting_time_mins: 0,
            price_per_kg,
            operating_hours: OperatingHours::always_open(),
            facilities: BTreeSet::new(),
            last_updated: DateTime::<Utc>::default(),
            payment_methods: BTreeSet::from([PaymentMethod::Cash]),
            reviews: Vec::new(),
            rating: 0.0,
        }
    }

    /// Accepted payment methods. Always contains [`PaymentMethod::Cash`].
    pub fn payment_methods(&self) -> &BTreeSet<PaymentMethod> {
        &self.payment_methods
    }

    /// Replace the accepted payment methods. Cash is added if missing.
    pub fn set_payment_methods(&mut self, methods: impl IntoIterator<Item = PaymentMethod>) {
        self.payment_methods = methods.into_iter().collect();
        self.payment_methods.insert(PaymentMethod::Cash);
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Replace the reviews and recompute the aggregate rating.
    pub fn set_reviews(&mut self, reviews: Vec<Review>) {
        self.rating = aggregate_rating(&reviews);
        self.reviews = reviews;
    }

    /// Builder-style variant of [`Station::set_reviews`].
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.set_reviews(reviews);
        self
    }

    /// Mean review rating to one decimal place, 0 without reviews.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    pub fn has_facility(&self, facility: Facility) -> bool {
        self.facilities.contains(&facility)
    }

    pub fn accepts(&self, method: PaymentMethod) -> bool {
        self.payment_methods.contains(&method)
    }

    /// Queue indicator shown on station cards.
    pub fn wait_label(&self) -> String {
        match self.status {
            StationStatus::Available => "No Wait".to_string(),
            StationStatus::Busy => format!("~{} min wait", self.waiting_time_mins),
            StationStatus::Closed | StationStatus::Maintenance => "Unavailable".to_string(),
        }
    }

    /// Status badge shown on the detail panel.
    pub fn status_summary(&self) -> String {
        match self.status {
            StationStatus::Available => "Available Now".to_string(),
            StationStatus::Busy => format!("Busy ({} min wait)", self.waiting_time_mins),
            StationStatus::Closed => "Closed Now".to_string(),
            StationStatus::Maintenance => "Under Maintenance".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StarRating;

    fn station() -> Station {
        Station::new(
            StationId::parse("station-0").unwrap(),
            "EcoGas CNG Pune 3",
            Coordinate::new(18.5204, 73.8567),
            58.4,
        )
    }

    fn review(stars: u8) -> Review {
        Review {
            id: format!("review-station-0-{stars}"),
            user_id: "user-12".to_string(),
            username: "Ava R.".to_string(),
            rating: StarRating::new(stars).unwrap(),
            comment: "Good location".to_string(),
            date: DateTime::<Utc>::default(),
            helpful: 3,
        }
    }

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("station-0").is_ok());
        assert!(StationId::parse("abc").is_ok());
        assert_eq!(StationId::indexed(12).as_str(), "station-12");
    }

    #[test]
    fn reject_invalid_ids() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse(" station").is_err());
        assert!(StationId::parse("station\t1").is_err());
    }

    #[test]
    fn id_display_and_debug() {
        let id = StationId::indexed(3);
        assert_eq!(format!("{}", id), "station-3");
        assert_eq!(format!("{:?}", id), "StationId(station-3)");
    }

    #[test]
    fn parse_status() {
        for status in StationStatus::ALL {
            assert_eq!(status.as_str().parse::<StationStatus>(), Ok(status));
        }
        assert!("open".parse::<StationStatus>().is_err());
        assert!("Available".parse::<StationStatus>().is_err());
    }

    #[test]
    fn new_station_accepts_cash() {
        let s = station();
        assert!(s.accepts(PaymentMethod::Cash));
        assert_eq!(s.payment_methods().len(), 1);
        assert_eq!(s.review_count(), 0);
        assert_eq!(s.rating(), 0.0);
        assert_eq!(s.price_per_kg, 58.4);
    }

    #[test]
    fn cash_survives_payment_replacement() {
        let mut s = station();
        s.set_payment_methods([PaymentMethod::Upi, PaymentMethod::Wallet]);
        assert!(s.accepts(PaymentMethod::Cash));
        assert!(s.accepts(PaymentMethod::Upi));
        assert!(!s.accepts(PaymentMethod::CreditCard));
        assert_eq!(s.payment_methods().len(), 3);
    }

    #[test]
    fn payment_methods_are_a_set() {
        let mut s = station();
        s.set_payment_methods([PaymentMethod::Upi, PaymentMethod::Upi, PaymentMethod::Cash]);
        assert_eq!(s.payment_methods().len(), 2);
    }

    #[test]
    fn reviews_drive_rating() {
        let s = station().with_reviews(vec![review(5), review(4), review(4)]);
        assert_eq!(s.review_count(), 3);
        assert_eq!(s.rating(), 4.3);

        let mut s = s;
        s.set_reviews(Vec::new());
        assert_eq!(s.review_count(), 0);
        assert_eq!(s.rating(), 0.0);
    }

    #[test]
    fn wait_labels() {
        let mut s = station();
        assert_eq!(s.wait_label(), "No Wait");
        assert_eq!(s.status_summary(), "Available Now");

        s.status = StationStatus::Busy;
        s.waiting_time_mins = 12;
        assert_eq!(s.wait_label(), "~12 min wait");
        assert_eq!(s.status_summary(), "Busy (12 min wait)");

        s.status = StationStatus::Closed;
        assert_eq!(s.wait_label(), "Unavailable");
        assert_eq!(s.status_summary(), "Closed Now");

        s.status = StationStatus::Maintenance;
        assert_eq!(s.wait_label(), "Unavailable");
        assert_eq!(s.status_summary(), "Under Maintenance");
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Coordinate::new(19.076, 72.8777);
        assert!(p.distance_km(&p).abs() < 1e-9);
    }

    #[test]
    fn distance_between_cities() {
        // Mumbai to Pune is roughly 120 km as the crow flies
        let mumbai = Coordinate::new(19.076, 72.8777);
        let pune = Coordinate::new(18.5204, 73.8567);
        let d = mumbai.distance_km(&pune);
        assert!((115.0..125.0).contains(&d), "got {d}");
        assert!((d - pune.distance_km(&mumbai)).abs() < 1e-9);
    }
}
