//! Labor-hours rule engine.
//!
//! Pure functions over a [`Schedule`] snapshot producing structured
//! [`Diagnostic`] records. The engine never mutates the store, never
//! blocks an insertion, and never fails on a well-formed schedule;
//! callers re-run [`validate`] after every insert or removal so the
//! diagnostic list is always derived from current state.
//!
//! # Rules
//!
//! | Rule | Threshold | Severity |
//! |------|-----------|----------|
//! | Overlapping slots on one day | any shared minute | Error |
//! | Continuous work per bond | > 360 min without a 60-min break | Error |
//! | Daily total per bond | > 600 min | Error |
//! | Rest between adjacent days | < 660 min | Recommendation |
//! | Weekly rest day | all seven days occupied | Recommendation |
//!
//! The commute category ([`Company::is_transit`]) stays subject to overlap
//! detection but is exempt from the working-hours and rest rules.

use serde::{Deserialize, Serialize};

use crate::models::{Company, Schedule, Slot, SlotId, TimeOfDay, Weekday};

/// Longest allowed run of work without a full break, in minutes (6 h).
pub const MAX_CONTINUOUS_MIN: u32 = 360;
/// Largest allowed daily total per bond, in minutes (10 h).
pub const MAX_DAILY_MIN: u32 = 600;
/// Gap that splits two slots into separate continuous runs, in minutes.
pub const MIN_BREAK_MIN: u32 = 60;
/// Recommended rest between consecutive days, in minutes (11 h).
pub const RECOMMENDED_REST_MIN: u32 = 660;

/// How binding a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// A hard rule violation. Insertion still succeeds; the message is
    /// informational.
    Error,
    /// An advisory shortfall.
    Recommendation,
}

/// A slot reference carried inside a diagnostic, denormalized so the
/// presentation layer can format ranges without re-querying the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRef {
    /// Id of the referenced slot.
    pub id: SlotId,
    /// Its start time.
    pub start: TimeOfDay,
    /// Its end time.
    pub end: TimeOfDay,
}

impl From<&Slot> for SlotRef {
    fn from(slot: &Slot) -> Self {
        Self {
            id: slot.id,
            start: slot.start,
            end: slot.end,
        }
    }
}

/// What a diagnostic is about. All measured values are minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Two slots on the same day share time.
    Overlap {
        /// Day both slots live on.
        day: Weekday,
        /// Earlier slot in the day's ordering.
        first: SlotRef,
        /// Later slot in the day's ordering.
        second: SlotRef,
        /// Whether either side is a commute slot (distinct wording, same
        /// severity).
        transit: bool,
    },
    /// A run of slots for one bond exceeds the continuous-work cap.
    ContinuousWorkExceeded {
        /// Day of the run.
        day: Weekday,
        /// Bond the run belongs to.
        company: Company,
        /// Accumulated run length.
        worked_min: u32,
        /// The cap that was exceeded.
        limit_min: u32,
    },
    /// One bond's plain daily total exceeds the daily cap.
    DailyTotalExceeded {
        /// Day of the total.
        day: Weekday,
        /// Bond the total belongs to.
        company: Company,
        /// Summed slot durations.
        worked_min: u32,
        /// The cap that was exceeded.
        limit_min: u32,
    },
    /// Rest between two adjacent days falls short of the recommendation.
    InsufficientRest {
        /// Earlier day of the pair.
        from: Weekday,
        /// Later day of the pair.
        to: Weekday,
        /// Measured rest.
        rest_min: u32,
        /// The recommended minimum.
        recommended_min: u32,
    },
    /// Every weekday has at least one slot; no rest day remains.
    MissingWeeklyRest,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error or advisory.
    pub severity: Severity,
    /// Structured payload; the boundary formats the text.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates an overlap error for two slots on `day`.
    pub fn overlap(day: Weekday, first: &Slot, second: &Slot) -> Self {
        Self {
            severity: Severity::Error,
            kind: DiagnosticKind::Overlap {
                day,
                first: first.into(),
                second: second.into(),
                transit: first.company.is_transit() || second.company.is_transit(),
            },
        }
    }

    /// Creates a continuous-work cap error.
    pub fn continuous_work(day: Weekday, company: Company, worked_min: u32) -> Self {
        Self {
            severity: Severity::Error,
            kind: DiagnosticKind::ContinuousWorkExceeded {
                day,
                company,
                worked_min,
                limit_min: MAX_CONTINUOUS_MIN,
            },
        }
    }

    /// Creates a daily-total cap error.
    pub fn daily_total(day: Weekday, company: Company, worked_min: u32) -> Self {
        Self {
            severity: Severity::Error,
            kind: DiagnosticKind::DailyTotalExceeded {
                day,
                company,
                worked_min,
                limit_min: MAX_DAILY_MIN,
            },
        }
    }

    /// Creates a rest-shortfall recommendation between adjacent days.
    pub fn insufficient_rest(from: Weekday, to: Weekday, rest_min: u32) -> Self {
        Self {
            severity: Severity::Recommendation,
            kind: DiagnosticKind::InsufficientRest {
                from,
                to,
                rest_min,
                recommended_min: RECOMMENDED_REST_MIN,
            },
        }
    }

    /// Creates the missing-weekly-rest recommendation.
    pub fn missing_weekly_rest() -> Self {
        Self {
            severity: Severity::Recommendation,
            kind: DiagnosticKind::MissingWeeklyRest,
        }
    }

    /// Whether this is a hard violation.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Runs the full diagnostic pass over the whole schedule.
///
/// Re-derives every finding from scratch: overlaps, then per day the
/// continuous-work and daily-total checks for each non-transit bond and
/// the rest check for each non-transit slot, then the weekly-rest check.
/// Identical findings are deduplicated preserving first occurrence.
pub fn validate(schedule: &Schedule) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    for diagnostic in overlap_diagnostics(schedule) {
        push_unique(&mut out, diagnostic);
    }

    for (day, slots) in schedule.days() {
        let mut companies: Vec<Company> = Vec::new();
        for slot in slots {
            if !slot.company.is_transit() && !companies.contains(&slot.company) {
                companies.push(slot.company);
            }
        }

        for &company in &companies {
            for diagnostic in continuous_work_diagnostics(schedule, day, company) {
                push_unique(&mut out, diagnostic);
            }
            if let Some(diagnostic) = daily_total_diagnostic(schedule, day, company) {
                push_unique(&mut out, diagnostic);
            }
        }

        for slot in slots {
            if slot.company.is_transit() {
                continue;
            }
            for diagnostic in rest_diagnostics(schedule, day, slot.start, slot.end) {
                push_unique(&mut out, diagnostic);
            }
        }
    }

    if let Some(diagnostic) = weekly_rest_diagnostic(schedule) {
        push_unique(&mut out, diagnostic);
    }

    out
}

/// Finds every overlapping pair of slots, day by day.
///
/// The pairwise scan compares each slot against later slots only, so a
/// slot is never compared with itself and each pair is reported once.
pub fn overlap_diagnostics(schedule: &Schedule) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (day, slots) in schedule.days() {
        for i in 0..slots.len() {
            for j in (i + 1)..slots.len() {
                if slots[i].overlaps(&slots[j]) {
                    out.push(Diagnostic::overlap(day, &slots[i], &slots[j]));
                }
            }
        }
    }
    out
}

/// Checks one bond's continuous runs on one day.
///
/// Walking the day's slots for `company` in start order, a gap shorter
/// than [`MIN_BREAK_MIN`] extends the current run by the slot's duration;
/// a full break starts a new run. Every run over [`MAX_CONTINUOUS_MIN`]
/// yields a diagnostic, not just the final one.
pub fn continuous_work_diagnostics(
    schedule: &Schedule,
    day: Weekday,
    company: Company,
) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    let mut run_min: u32 = 0;
    let mut prev_end: Option<i32> = None;

    let close_run = |run_min: u32, out: &mut Vec<Diagnostic>| {
        if run_min > MAX_CONTINUOUS_MIN {
            out.push(Diagnostic::continuous_work(day, company, run_min));
        }
    };

    for slot in schedule.slots(day).iter().filter(|s| s.company == company) {
        let start = i32::from(slot.start.minutes());
        let duration = u32::from(slot.duration_min());
        match prev_end {
            // Overlapping slots have a negative gap and still extend the run.
            Some(end) if start - end < MIN_BREAK_MIN as i32 => run_min += duration,
            Some(_) => {
                close_run(run_min, &mut out);
                run_min = duration;
            }
            None => run_min = duration,
        }
        prev_end = Some(i32::from(slot.end.minutes()));
    }
    close_run(run_min, &mut out);

    out
}

/// Checks one bond's plain daily total on one day.
pub fn daily_total_diagnostic(
    schedule: &Schedule,
    day: Weekday,
    company: Company,
) -> Option<Diagnostic> {
    let total: u32 = schedule
        .slots(day)
        .iter()
        .filter(|s| s.company == company)
        .map(|s| u32::from(s.duration_min()))
        .sum();
    (total > MAX_DAILY_MIN).then(|| Diagnostic::daily_total(day, company, total))
}

/// Checks one interval on `day` against both adjacent days' boundary slots.
///
/// Rest before = interval start + time from the previous day's last slot
/// end to midnight; rest after = time from the interval end to midnight +
/// the next day's first slot start. An adjacent day without slots is
/// skipped. Also usable to pre-check a candidate interval before insertion.
pub fn rest_diagnostics(
    schedule: &Schedule,
    day: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    let previous = day.previous();
    if let Some(last) = schedule.last_slot(previous) {
        let rest = u32::from(start.minutes()) + u32::from(last.end.minutes_to_midnight());
        if rest < RECOMMENDED_REST_MIN {
            out.push(Diagnostic::insufficient_rest(previous, day, rest));
        }
    }

    let next = day.next();
    if let Some(first) = schedule.first_slot(next) {
        let rest = u32::from(end.minutes_to_midnight()) + u32::from(first.start.minutes());
        if rest < RECOMMENDED_REST_MIN {
            out.push(Diagnostic::insufficient_rest(day, next, rest));
        }
    }

    out
}

/// Checks for a free weekday across the whole schedule.
pub fn weekly_rest_diagnostic(schedule: &Schedule) -> Option<Diagnostic> {
    let all_occupied = Weekday::ALL.iter().all(|&day| schedule.has_slots(day));
    all_occupied.then(Diagnostic::missing_weekly_rest)
}

fn push_unique(out: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    if !out.contains(&diagnostic) {
        out.push(diagnostic);
    }
}
