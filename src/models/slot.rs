//! Time-slot model.
//!
//! One scheduled interval on one weekday for one bond. The `start < end`
//! invariant is enforced at construction, so every live slot has a
//! positive duration within a single day.

use serde::{Deserialize, Serialize};

use super::company::Company;
use super::time::{TimeError, TimeOfDay};

/// Identifier of a slot within a schedule. Unique while the slot lives;
/// assigned monotonically and never rewound.
pub type SlotId = u32;

/// A scheduled time interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique id within the owning schedule.
    pub id: SlotId,
    /// Interval start (inclusive).
    pub start: TimeOfDay,
    /// Interval end (exclusive).
    pub end: TimeOfDay,
    /// Bond the interval is booked under.
    pub company: Company,
}

impl Slot {
    /// Creates a slot, rejecting empty or inverted intervals.
    pub fn new(
        id: SlotId,
        start: TimeOfDay,
        end: TimeOfDay,
        company: Company,
    ) -> Result<Self, TimeError> {
        if start >= end {
            return Err(TimeError::InvalidRange { start, end });
        }
        Ok(Self {
            id,
            start,
            end,
            company,
        })
    }

    /// Interval duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether two slots share any time.
    ///
    /// Half-open semantics: touching boundaries (`self.end == other.start`)
    /// do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(text: &str) -> TimeOfDay {
        TimeOfDay::parse(text).unwrap()
    }

    fn slot(id: SlotId, start: &str, end: &str) -> Slot {
        Slot::new(id, t(start), t(end), Company::Ufsj1).unwrap()
    }

    #[test]
    fn test_rejects_inverted_interval() {
        assert!(matches!(
            Slot::new(1, t("12:00"), t("08:00"), Company::Ufsj1),
            Err(TimeError::InvalidRange { .. })
        ));
        assert!(matches!(
            Slot::new(1, t("12:00"), t("12:00"), Company::Ufsj1),
            Err(TimeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_duration() {
        assert_eq!(slot(1, "08:00", "12:00").duration_min(), 240);
        assert_eq!(slot(2, "23:00", "23:59").duration_min(), 59);
    }

    #[test]
    fn test_overlap_symmetric() {
        let a = slot(1, "08:00", "12:00");
        let b = slot(2, "10:00", "14:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_boundaries_do_not_overlap() {
        let a = slot(1, "08:00", "14:00");
        let b = slot(2, "14:00", "15:00");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = slot(1, "08:00", "18:00");
        let inner = slot(2, "10:00", "11:00");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
