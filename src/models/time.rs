//! Time-of-day model.
//!
//! All rule arithmetic runs on minutes since midnight (0..1440) rather than
//! on "HH:MM" strings. Parsing accepts exactly two zero-or-more padded
//! numeric components separated by ':'.
//!
//! # Precedence
//! Raw-input failures (`TimeError`) abort before any schedule mutation;
//! a well-formed [`TimeOfDay`] can never make downstream rules fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minutes in one day. Used by the inter-day rest arithmetic.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Errors for raw time input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Input is not two numeric ':'-separated components.
    #[error("invalid time format {0:?} (expected \"HH:MM\")")]
    InvalidFormat(String),
    /// Components parsed but fall outside 00:00..=23:59.
    #[error("time out of range {hour:02}:{minute:02} (valid 00:00 to 23:59)")]
    OutOfRange { hour: u32, minute: u32 },
    /// An interval's start is not strictly before its end.
    #[error("start must be earlier than end ({start} to {end})")]
    InvalidRange { start: TimeOfDay, end: TimeOfDay },
}

/// A time of day as minutes since midnight.
///
/// Ordered, so slot lists sort by plain comparison. Serializes as the
/// bare minute count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time from hour and minute components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if Self::is_valid(hour, minute) {
            Ok(Self((hour * 60 + minute) as u16))
        } else {
            Err(TimeError::OutOfRange { hour, minute })
        }
    }

    /// Whether the components form a valid time (00:00..=23:59).
    pub fn is_valid(hour: u32, minute: u32) -> bool {
        hour <= 23 && minute <= 59
    }

    /// Parses "HH:MM".
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let invalid = || TimeError::InvalidFormat(text.to_string());
        let (h, m) = text.split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || m.is_empty() || m.contains(':') {
            return Err(invalid());
        }
        let hour: u32 = h.parse().map_err(|_| invalid())?;
        let minute: u32 = m.parse().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }

    /// Minutes since midnight (0..1440).
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0..24).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0..60).
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Minutes remaining until midnight.
    #[inline]
    pub fn minutes_to_midnight(self) -> u16 {
        MINUTES_PER_DAY - self.0
    }
}

impl TryFrom<u16> for TimeOfDay {
    type Error = TimeError;

    fn try_from(minutes: u16) -> Result<Self, TimeError> {
        if minutes < MINUTES_PER_DAY {
            Ok(Self(minutes))
        } else {
            Err(TimeError::OutOfRange {
                hour: u32::from(minutes) / 60,
                minute: u32::from(minutes) % 60,
            })
        }
    }
}

impl From<TimeOfDay> for u16 {
    fn from(t: TimeOfDay) -> u16 {
        t.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, TimeError> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(TimeOfDay::parse("08:30").unwrap().minutes(), 510);
        assert_eq!(TimeOfDay::parse("00:00").unwrap().minutes(), 0);
        assert_eq!(TimeOfDay::parse("23:59").unwrap().minutes(), 1439);
    }

    #[test]
    fn test_parse_invalid_format() {
        for text in ["", "08", "8h30", "08:30:00", "ab:cd", ":30", "08:"] {
            assert!(
                matches!(TimeOfDay::parse(text), Err(TimeError::InvalidFormat(_))),
                "{text:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            TimeOfDay::parse("24:00"),
            Err(TimeError::OutOfRange {
                hour: 24,
                minute: 0
            })
        );
        assert!(matches!(
            TimeOfDay::parse("12:60"),
            Err(TimeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_is_valid() {
        assert!(TimeOfDay::is_valid(0, 0));
        assert!(TimeOfDay::is_valid(23, 59));
        assert!(!TimeOfDay::is_valid(24, 0));
        assert!(!TimeOfDay::is_valid(0, 60));
    }

    #[test]
    fn test_components() {
        let t = TimeOfDay::parse("22:05").unwrap();
        assert_eq!(t.hour(), 22);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.minutes_to_midnight(), 115);
    }

    #[test]
    fn test_display_zero_padded() {
        assert_eq!(TimeOfDay::new(6, 5).unwrap().to_string(), "06:05");
        assert_eq!(TimeOfDay::new(18, 30).unwrap().to_string(), "18:30");
    }

    #[test]
    fn test_ordering_matches_clock() {
        let a = TimeOfDay::parse("09:00").unwrap();
        let b = TimeOfDay::parse("10:30").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let t: TimeOfDay = serde_json::from_str("510").unwrap();
        assert_eq!(t, TimeOfDay::parse("08:30").unwrap());
        assert!(serde_json::from_str::<TimeOfDay>("1440").is_err());
    }
}
