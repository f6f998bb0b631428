//! Reference localities that generated stations are scattered around.

use crate::domain::Coordinate;

/// A named city with its region and centre point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locality {
    pub name: &'static str,
    pub region: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Locality {
    pub fn centre(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Major cities used as station anchors.
pub const LOCALITIES: [Locality; 10] = [
    Locality { name: "Mumbai", region: "Maharashtra", lat: 19.076, lng: 72.8777 },
    Locality { name: "Delhi", region: "Delhi", lat: 28.7041, lng: 77.1025 },
    Locality { name: "Bangalore", region: "Karnataka", lat: 12.9716, lng: 77.5946 },
    Locality { name: "Hyderabad", region: "Telangana", lat: 17.385, lng: 78.4867 },
    Locality { name: "Chennai", region: "Tamil Nadu", lat: 13.0827, lng: 80.2707 },
    Locality { name: "Kolkata", region: "West Bengal", lat: 22.5726, lng: 88.3639 },
    Locality { name: "Pune", region: "Maharashtra", lat: 18.5204, lng: 73.8567 },
    Locality { name: "Ahmedabad", region: "Gujarat", lat: 23.0225, lng: 72.5714 },
    Locality { name: "Jaipur", region: "Rajasthan", lat: 26.9124, lng: 75.7873 },
    Locality { name: "Lucknow", region: "Uttar Pradesh", lat: 26.8467, lng: 80.9462 },
];

/// Look up a locality by city name (case-insensitive).
pub fn find_locality(name: &str) -> Option<&'static Locality> {
    LOCALITIES
        .iter()
        .find(|l| l.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = LOCALITIES.iter().map(|l| l.name).collect();
        assert_eq!(names.len(), LOCALITIES.len());
    }

    #[test]
    fn find_by_name() {
        let pune = find_locality("pune").unwrap();
        assert_eq!(pune.region, "Maharashtra");
        assert_eq!(pune.centre(), Coordinate::new(18.5204, 73.8567));

        assert!(find_locality("Atlantis").is_none());
    }
}
