//! User reviews of stations.

use std::fmt;

use chrono::{DateTime, Utc};

/// Error returned for a star rating outside 1-5.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid star rating {0}: must be 1-5")]
pub struct InvalidStarRating(pub u8);

/// A star rating from 1 to 5 inclusive.
///
/// # Examples
///
/// ```
/// use cng_server::domain::StarRating;
///
/// assert_eq!(StarRating::new(4).unwrap().get(), 4);
/// assert!(StarRating::new(0).is_err());
/// assert!(StarRating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarRating(u8);

impl StarRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self, InvalidStarRating> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(InvalidStarRating(stars))
        }
    }

    /// Clamp `stars` into 1-5.
    pub fn saturating(stars: u8) -> Self {
        Self(stars.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user's rating of one station.
///
/// Reviews are immutable once created; there is no edit path.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub rating: StarRating,
    pub comment: String,
    pub date: DateTime<Utc>,
    /// Number of "helpful" votes.
    pub helpful: u32,
}

/// Mean star rating rounded to one decimal place, or 0 with no reviews.
pub fn aggregate_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating.get())).sum();
    let mean = f64::from(sum) / reviews.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn review(stars: u8) -> Review {
        Review {
            id: format!("review-{stars}"),
            user_id: "user-1".to_string(),
            username: "Emma L.".to_string(),
            rating: StarRating::new(stars).unwrap(),
            comment: "Always reliable".to_string(),
            date: Utc.with_ymd_and_hms(2026, 1, 3, 12, 0, 0).unwrap(),
            helpful: 0,
        }
    }

    #[test]
    fn star_rating_bounds() {
        for stars in 1..=5 {
            assert!(StarRating::new(stars).is_ok());
        }
        assert_eq!(StarRating::new(0), Err(InvalidStarRating(0)));
        assert_eq!(StarRating::new(6), Err(InvalidStarRating(6)));
    }

    #[test]
    fn saturating_clamps() {
        assert_eq!(StarRating::saturating(0).get(), 1);
        assert_eq!(StarRating::saturating(3).get(), 3);
        assert_eq!(StarRating::saturating(200).get(), 5);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            InvalidStarRating(9).to_string(),
            "invalid star rating 9: must be 1-5"
        );
    }

    #[test]
    fn no_reviews_rates_zero() {
        assert_eq!(aggregate_rating(&[]), 0.0);
    }

    #[test]
    fn mean_is_rounded_to_one_decimal() {
        // 4 + 5 + 5 = 14 / 3 = 4.666...
        let reviews = vec![review(4), review(5), review(5)];
        assert_eq!(aggregate_rating(&reviews), 4.7);

        // 1 + 2 = 1.5 exactly
        let reviews = vec![review(1), review(2)];
        assert_eq!(aggregate_rating(&reviews), 1.5);

        // 3 + 3 + 4 = 3.333...
        let reviews = vec![review(3), review(3), review(4)];
        assert_eq!(aggregate_rating(&reviews), 3.3);
    }
}
