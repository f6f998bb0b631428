//! Station search: free text plus filter predicates.
//!
//! A query is a pure function of the collection it is applied to. It never
//! mutates stations, preserves their relative order, and yields an empty
//! list (not an error) when nothing matches.

use tracing::debug;

use crate::domain::Station;

use super::filter::StationFilter;

/// Search text and filter selection, evaluated together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationQuery {
    /// Lower-cased search text.
    search: String,
    filter: StationFilter,
}

impl StationQuery {
    /// Build a query. The search text is matched case-insensitively.
    pub fn new(search: &str, filter: StationFilter) -> Self {
        Self {
            search: search.to_lowercase(),
            filter,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> &StationFilter {
        &self.filter
    }

    /// Name, address or city contains the search text. Empty text matches.
    pub fn matches_text(&self, station: &Station) -> bool {
        self.search.is_empty()
            || [&station.name, &station.address, &station.city]
                .iter()
                .any(|field| field.to_lowercase().contains(&self.search))
    }

    pub fn matches_status(&self, station: &Station) -> bool {
        self.filter
            .status()
            .is_none_or(|status| station.status == status)
    }

    /// Station offers every required facility.
    pub fn matches_facilities(&self, station: &Station) -> bool {
        self.filter
            .facilities()
            .iter()
            .all(|f| station.has_facility(*f))
    }

    /// Station accepts every required payment method.
    pub fn matches_payment_methods(&self, station: &Station) -> bool {
        self.filter
            .payment_methods()
            .iter()
            .all(|m| station.accepts(*m))
    }

    pub fn matches_price(&self, station: &Station) -> bool {
        self.filter
            .max_price()
            .is_none_or(|max| station.price_per_kg <= max)
    }

    /// All five predicates hold.
    pub fn matches(&self, station: &Station) -> bool {
        self.matches_text(station)
            && self.matches_status(station)
            && self.matches_facilities(station)
            && self.matches_payment_methods(station)
            && self.matches_price(station)
    }

    /// Matching stations, in input order.
    pub fn apply<'a>(&self, stations: &'a [Station]) -> Vec<&'a Station> {
        let matched: Vec<&Station> = stations.iter().filter(|s| self.matches(s)).collect();
        debug!(
            total = stations.len(),
            matched = matched.len(),
            active_filters = self.filter.active_count(),
            "station query evaluated"
        );
        matched
    }
}

/// One-shot form of [`StationQuery::apply`].
pub fn filter_stations<'a>(
    stations: &'a [Station],
    search: &str,
    filter: &StationFilter,
) -> Vec<&'a Station> {
    StationQuery::new(search, filter.clone()).apply(stations)
}
