//! Station amenities and accepted payment methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::UnknownVariant;

/// An amenity a station may offer.
///
/// Variants are ordered as the filter panel lists them, so a
/// `BTreeSet<Facility>` iterates in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facility {
    Restrooms,
    ConvenienceStore,
    Food,
    Coffee,
    CarWash,
    Atm,
    WaitingArea,
    AirFilling,
}

impl Facility {
    /// Every facility, in display order.
    pub const ALL: [Facility; 8] = [
        Facility::Restrooms,
        Facility::ConvenienceStore,
        Facility::Food,
        Facility::Coffee,
        Facility::CarWash,
        Facility::Atm,
        Facility::WaitingArea,
        Facility::AirFilling,
    ];

    /// Wire name, e.g. `convenience_store`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Facility::Restrooms => "restrooms",
            Facility::ConvenienceStore => "convenience_store",
            Facility::Food => "food",
            Facility::Coffee => "coffee",
            Facility::CarWash => "car_wash",
            Facility::Atm => "atm",
            Facility::WaitingArea => "waiting_area",
            Facility::AirFilling => "air_filling",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Facility::Restrooms => "Restrooms",
            Facility::ConvenienceStore => "Convenience Store",
            Facility::Food => "Food",
            Facility::Coffee => "Coffee",
            Facility::CarWash => "Car Wash",
            Facility::Atm => "ATM",
            Facility::WaitingArea => "Waiting Area",
            Facility::AirFilling => "Air Filling",
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facility {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facility::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("facility", s))
    }
}

/// A way of paying at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    Upi,
    Wallet,
    PrepaidCard,
}

impl PaymentMethod {
    /// Every payment method, in display order.
    pub const ALL: [PaymentMethod; 6] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Upi,
        PaymentMethod::Wallet,
        PaymentMethod::PrepaidCard,
    ];

    /// Wire name, e.g. `prepaid_card`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::PrepaidCard => "prepaid_card",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Wallet => "Wallet",
            PaymentMethod::PrepaidCard => "Prepaid Card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("payment method", s))
    }
}
