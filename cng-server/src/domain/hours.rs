//! Station opening hours.
//!
//! Hours are "HH:MM" strings on a 24-hour clock. `24:00` is accepted as a
//! closing time so that round-the-clock stations read "00:00 - 24:00".

use std::fmt;

/// Error returned when parsing an invalid clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {reason}")]
pub struct InvalidClockTime {
    reason: &'static str,
}

impl InvalidClockTime {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day between `00:00` and `24:00` inclusive.
///
/// # Examples
///
/// ```
/// use cng_server::domain::ClockTime;
///
/// let t = ClockTime::parse("05:30").unwrap();
/// assert_eq!(t.to_string(), "05:30");
///
/// assert!(ClockTime::parse("24:00").is_ok());
/// assert!(ClockTime::parse("24:01").is_err());
/// assert!(ClockTime::parse("5:30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Midnight at the start of the day.
    pub const START_OF_DAY: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Midnight at the end of the day.
    pub const END_OF_DAY: ClockTime = ClockTime {
        hour: 24,
        minute: 0,
    };

    /// Create a clock time from components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidClockTime> {
        if minute > 59 {
            return Err(InvalidClockTime::new("minute must be 0-59"));
        }
        if hour > 24 {
            return Err(InvalidClockTime::new("hour must be 0-24"));
        }
        if hour == 24 && minute != 0 {
            return Err(InvalidClockTime::new("24:00 is the latest time"));
        }
        Ok(Self { hour, minute })
    }

    /// Create a clock time on the hour.
    pub fn on_the_hour(hour: u8) -> Result<Self, InvalidClockTime> {
        Self::new(hour, 0)
    }

    /// A time on the hour, with hours past 24 saturating to `24:00`.
    pub fn saturating_hour(hour: u8) -> Self {
        Self {
            hour: hour.min(24),
            minute: 0,
        }
    }

    /// Parse a time from "HH:MM" format.
    pub fn parse(s: &str) -> Result<Self, InvalidClockTime> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 {
            return Err(InvalidClockTime::new("expected HH:MM format"));
        }
        if bytes[2] != b':' {
            return Err(InvalidClockTime::new("expected colon at position 2"));
        }

        let hour = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| InvalidClockTime::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| InvalidClockTime::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

fn parse_two_digits(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => Some((a - b'0') * 10 + (b - b'0')),
        _ => None,
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Daily opening and closing time of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatingHours {
    pub open: ClockTime,
    pub close: ClockTime,
}

impl OperatingHours {
    /// Create opening hours from an opening and closing time.
    pub fn new(open: ClockTime, close: ClockTime) -> Self {
        Self { open, close }
    }

    /// Round-the-clock opening, `00:00 - 24:00`.
    pub fn always_open() -> Self {
        Self::new(ClockTime::START_OF_DAY, ClockTime::END_OF_DAY)
    }

    /// Returns true if the station never closes.
    pub fn is_24_hours(&self) -> bool {
        self.open == ClockTime::START_OF_DAY && self.close == ClockTime::END_OF_DAY
    }

    /// Text shown on station cards: "24 Hours" or "HH:MM - HH:MM".
    pub fn label(&self) -> String {
        if self.is_24_hours() {
            "24 Hours".to_string()
        } else {
            format!("{} - {}", self.open, self.close)
        }
    }
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self::always_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert_eq!(ClockTime::parse("00:00").unwrap(), ClockTime::START_OF_DAY);
        assert_eq!(ClockTime::parse("24:00").unwrap(), ClockTime::END_OF_DAY);
        let t = ClockTime::parse("21:45").unwrap();
        assert_eq!(t.hour(), 21);
        assert_eq!(t.minute(), 45);
    }

    #[test]
    fn reject_invalid_times() {
        assert!(ClockTime::parse("").is_err());
        assert!(ClockTime::parse("2100").is_err());
        assert!(ClockTime::parse("21-00").is_err());
        assert!(ClockTime::parse("2a:00").is_err());
        assert!(ClockTime::parse("25:00").is_err());
        assert!(ClockTime::parse("12:60").is_err());
        assert!(ClockTime::parse("24:30").is_err());
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(ClockTime::on_the_hour(5).unwrap().to_string(), "05:00");
        assert_eq!(ClockTime::END_OF_DAY.to_string(), "24:00");
    }

    #[test]
    fn saturating_hour_caps_at_end_of_day() {
        assert_eq!(ClockTime::saturating_hour(7).to_string(), "07:00");
        assert_eq!(ClockTime::saturating_hour(24), ClockTime::END_OF_DAY);
        assert_eq!(ClockTime::saturating_hour(30), ClockTime::END_OF_DAY);
    }

    #[test]
    fn always_open_label() {
        let hours = OperatingHours::default();
        assert!(hours.is_24_hours());
        assert_eq!(hours.label(), "24 Hours");
    }

    #[test]
    fn limited_hours_label() {
        let hours = OperatingHours::new(
            ClockTime::on_the_hour(6).unwrap(),
            ClockTime::on_the_hour(22).unwrap(),
        );
        assert!(!hours.is_24_hours());
        assert_eq!(hours.label(), "06:00 - 22:00");
    }

    #[test]
    fn ordering_follows_the_clock() {
        let early = ClockTime::parse("05:00").unwrap();
        let late = ClockTime::parse("23:00").unwrap();
        assert!(early < late);
        assert!(late < ClockTime::END_OF_DAY);
    }
}
