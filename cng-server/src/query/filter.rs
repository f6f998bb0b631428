//! User-selected station constraints.

use std::collections::BTreeSet;

use crate::domain::{Facility, PaymentMethod, StationStatus};

/// The active filter panel selection.
///
/// A filter is an immutable value: every mutator consumes it and returns
/// the updated filter, so a query always sees a consistent snapshot.
/// The default filter has nothing selected and matches every station.
///
/// # Examples
///
/// ```
/// use cng_server::domain::{Facility, StationStatus};
/// use cng_server::query::StationFilter;
///
/// let filter = StationFilter::default()
///     .with_status(Some(StationStatus::Available))
///     .toggle_facility(Facility::Food)
///     .with_max_price(Some(60.0));
/// assert_eq!(filter.active_count(), 3);
///
/// let filter = filter.toggle_facility(Facility::Food);
/// assert_eq!(filter.active_count(), 2);
///
/// assert!(filter.cleared().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationFilter {
    status: Option<StationStatus>,
    max_price: Option<f64>,
    facilities: BTreeSet<Facility>,
    payment_methods: BTreeSet<PaymentMethod>,
}

impl StationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required status, or `None` for any status.
    pub fn status(&self) -> Option<StationStatus> {
        self.status
    }

    /// Price ceiling per kilogram, inclusive.
    pub fn max_price(&self) -> Option<f64> {
        self.max_price
    }

    /// Facilities a station must all offer.
    pub fn facilities(&self) -> &BTreeSet<Facility> {
        &self.facilities
    }

    /// Payment methods a station must all accept.
    pub fn payment_methods(&self) -> &BTreeSet<PaymentMethod> {
        &self.payment_methods
    }

    pub fn with_status(mut self, status: Option<StationStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_max_price(mut self, max_price: Option<f64>) -> Self {
        self.max_price = max_price;
        self
    }

    /// Require `facility`, or stop requiring it if it was already required.
    pub fn toggle_facility(mut self, facility: Facility) -> Self {
        if !self.facilities.remove(&facility) {
            self.facilities.insert(facility);
        }
        self
    }

    /// Require `method`, or stop requiring it if it was already required.
    pub fn toggle_payment_method(mut self, method: PaymentMethod) -> Self {
        if !self.payment_methods.remove(&method) {
            self.payment_methods.insert(method);
        }
        self
    }

    /// Require every facility in `facilities` in addition to the current set.
    pub fn with_facilities(mut self, facilities: impl IntoIterator<Item = Facility>) -> Self {
        self.facilities.extend(facilities);
        self
    }

    /// Require every method in `methods` in addition to the current set.
    pub fn with_payment_methods(mut self, methods: impl IntoIterator<Item = PaymentMethod>) -> Self {
        self.payment_methods.extend(methods);
        self
    }

    /// The "clear all" action.
    pub fn cleared(self) -> Self {
        Self::default()
    }

    /// Number of selected constraints: one each for status and price, plus
    /// one per required facility and payment method.
    pub fn active_count(&self) -> usize {
        usize::from(self.status.is_some())
            + usize::from(self.max_price.is_some())
            + self.facilities.len()
            + self.payment_methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let filter = StationFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.status(), None);
        assert_eq!(filter.max_price(), None);
        assert!(filter.facilities().is_empty());
        assert!(filter.payment_methods().is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let filter = StationFilter::new().toggle_facility(Facility::Coffee);
        assert!(filter.facilities().contains(&Facility::Coffee));

        let filter = filter.toggle_facility(Facility::Coffee);
        assert!(filter.facilities().is_empty());

        let filter = StationFilter::new()
            .toggle_payment_method(PaymentMethod::Upi)
            .toggle_payment_method(PaymentMethod::Wallet)
            .toggle_payment_method(PaymentMethod::Upi);
        assert_eq!(
            filter.payment_methods().iter().copied().collect::<Vec<_>>(),
            vec![PaymentMethod::Wallet]
        );
    }

    #[test]
    fn mutators_leave_receiver_copy_untouched() {
        let base = StationFilter::new().with_status(Some(StationStatus::Busy));
        let derived = base.clone().toggle_facility(Facility::Atm);

        assert!(base.facilities().is_empty());
        assert_eq!(derived.status(), Some(StationStatus::Busy));
        assert_eq!(derived.facilities().len(), 1);
    }

    #[test]
    fn active_count_covers_every_constraint() {
        let filter = StationFilter::new()
            .with_status(Some(StationStatus::Closed))
            .with_max_price(Some(58.5))
            .with_facilities([Facility::Food, Facility::Coffee])
            .with_payment_methods([PaymentMethod::Upi]);
        assert_eq!(filter.active_count(), 5);

        let filter = filter.with_status(None).with_max_price(None);
        assert_eq!(filter.active_count(), 3);
    }

    #[test]
    fn with_facilities_deduplicates() {
        let filter = StationFilter::new().with_facilities([Facility::Food, Facility::Food]);
        assert_eq!(filter.facilities().len(), 1);
    }

    #[test]
    fn cleared_resets_everything() {
        let filter = StationFilter::new()
            .with_status(Some(StationStatus::Available))
            .with_max_price(Some(60.0))
            .toggle_facility(Facility::CarWash)
            .toggle_payment_method(PaymentMethod::Wallet)
            .cleared();
        assert_eq!(filter, StationFilter::default());
    }
}
