//! Schedule domain models.
//!
//! Core data types for the weekly work schedule: times of day, weekdays,
//! employment bonds, slots, and the owning store. All rule arithmetic in
//! [`crate::rules`] operates on these types via shared references; nothing
//! here renders text or touches the outside world.

mod company;
mod slot;
mod store;
mod time;
mod week;

pub use company::Company;
pub use slot::{Slot, SlotId};
pub use store::Schedule;
pub use time::{TimeError, TimeOfDay, MINUTES_PER_DAY};
pub use week::Weekday;
