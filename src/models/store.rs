//! Weekly schedule store.
//!
//! Maps weekdays to start-ordered slot lists and owns the monotone id
//! counter. Insertion is unconditional with respect to the business rules:
//! the store only rejects malformed intervals, and the rule engine
//! ([`crate::rules`]) reports on whatever the store holds. A weekday key
//! exists only while it has slots; presence of a key is what the
//! weekly-rest and adjacency rules observe.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::company::Company;
use super::slot::{Slot, SlotId};
use super::time::{TimeError, TimeOfDay};
use super::week::Weekday;

/// The in-memory weekly schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    days: BTreeMap<Weekday, Vec<Slot>>,
    next_id: SlotId,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self {
            days: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Inserts a slot and returns its assigned id.
    ///
    /// Only `start >= end` fails; rule violations never block insertion.
    /// The day's list is re-sorted by start time after the append, so the
    /// per-day ordering invariant holds after every call.
    pub fn insert(
        &mut self,
        day: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
        company: Company,
    ) -> Result<SlotId, TimeError> {
        let slot = Slot::new(self.next_id, start, end, company)?;
        let id = slot.id;
        self.next_id += 1;
        self.push_sorted(day, slot);
        Ok(id)
    }

    /// Removes the slot with the given id.
    ///
    /// Returns whether a slot was removed. The day key is dropped when its
    /// list empties, so absent-day semantics stay consistent.
    pub fn remove(&mut self, id: SlotId) -> bool {
        let mut removed = false;
        let mut emptied = None;
        for (day, slots) in &mut self.days {
            if let Some(index) = slots.iter().position(|s| s.id == id) {
                slots.remove(index);
                removed = true;
                if slots.is_empty() {
                    emptied = Some(*day);
                }
                break;
            }
        }
        if let Some(day) = emptied {
            self.days.remove(&day);
        }
        removed
    }

    /// Slots for a day, ascending by start time. Empty slice if the day
    /// has no slots.
    pub fn slots(&self, day: Weekday) -> &[Slot] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the day has at least one slot.
    #[inline]
    pub fn has_slots(&self, day: Weekday) -> bool {
        self.days.contains_key(&day)
    }

    /// Earliest slot of a day.
    pub fn first_slot(&self, day: Weekday) -> Option<&Slot> {
        self.days.get(&day).and_then(|slots| slots.first())
    }

    /// Latest-starting slot of a day.
    pub fn last_slot(&self, day: Weekday) -> Option<&Slot> {
        self.days.get(&day).and_then(|slots| slots.last())
    }

    /// Occupied days in display order with their slots.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[Slot])> {
        self.days.iter().map(|(day, slots)| (*day, slots.as_slice()))
    }

    /// Number of days with at least one slot.
    pub fn occupied_day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of slots across the week.
    pub fn slot_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Whether the schedule holds no slots at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Re-inserts a decoded slot, keeping the id counter ahead of it.
    /// Link-codec use only; id uniqueness is the decoder's responsibility.
    /// Saturates at `u32::MAX` rather than overflowing; the decoder
    /// rejects ids that large before they reach here.
    pub(crate) fn restore(&mut self, day: Weekday, slot: Slot) {
        self.next_id = self.next_id.max(slot.id.saturating_add(1));
        self.push_sorted(day, slot);
    }

    fn push_sorted(&mut self, day: Weekday, slot: Slot) {
        let slots = self.days.entry(day).or_default();
        slots.push(slot);
        slots.sort_by_key(|s| s.start);
    }
}
