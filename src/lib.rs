//! Weekly work-schedule model with labor-hours rule validation.
//!
//! Holds a week of time slots (weekday → start-ordered slots, each bound
//! to an employer or the commute category) and validates it against a
//! fixed set of labor-time rules, producing structured diagnostics. The
//! UI layer that collects form input and renders tables lives elsewhere;
//! this crate owns everything with semantic content.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeOfDay`, `Weekday`, `Company`,
//!   `Slot`, and the owning `Schedule` store
//! - **`rules`**: The rule engine — overlap, continuous-work and daily
//!   caps, inter-day rest, weekly rest; pure functions over a snapshot
//! - **`summary`**: Worked-minutes aggregation per bond and per day
//! - **`codec`**: Shareable-link string encoding with strict decoding
//! - **`render`**: pt-BR message formatting at the presentation boundary
//!
//! # Flow
//!
//! Insert or remove slots on a [`models::Schedule`], then re-run
//! [`rules::validate`] over the whole store; the diagnostic list is
//! always re-derived from current state, so removals retire the findings
//! that depended on the removed slot.
//!
//! ```
//! use jornada::models::{Company, Schedule, TimeOfDay, Weekday};
//! use jornada::rules;
//!
//! let mut schedule = Schedule::new();
//! schedule.insert(
//!     Weekday::Segunda,
//!     TimeOfDay::parse("08:00")?,
//!     TimeOfDay::parse("12:00")?,
//!     Company::Ufsj1,
//! )?;
//! assert!(rules::validate(&schedule).is_empty());
//! # Ok::<(), jornada::models::TimeError>(())
//! ```

pub mod codec;
pub mod models;
pub mod render;
pub mod rules;
pub mod summary;
