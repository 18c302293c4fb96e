//! Worked-minutes aggregation.
//!
//! Pure summaries over a [`Schedule`]: total minutes per bond across the
//! week, and the same partitioned per day. Commute time is included —
//! it consumes clock time even though the hour caps ignore it. The maps
//! are ordered so iteration matches display order without extra sorting.

use std::collections::BTreeMap;

use crate::models::{Company, Schedule, Weekday};

/// Total worked minutes per bond across the whole week.
pub fn company_hours(schedule: &Schedule) -> BTreeMap<Company, u32> {
    let mut totals = BTreeMap::new();
    for (_, slots) in schedule.days() {
        for slot in slots {
            *totals.entry(slot.company).or_insert(0) += u32::from(slot.duration_min());
        }
    }
    totals
}

/// Worked minutes per bond, partitioned per day.
///
/// Only occupied days appear as keys; per-day maps are never empty.
pub fn daily_company_hours(schedule: &Schedule) -> BTreeMap<Weekday, BTreeMap<Company, u32>> {
    let mut days = BTreeMap::new();
    for (day, slots) in schedule.days() {
        let totals: &mut BTreeMap<Company, u32> = days.entry(day).or_default();
        for slot in slots {
            *totals.entry(slot.company).or_insert(0) += u32::from(slot.duration_min());
        }
    }
    days
}
