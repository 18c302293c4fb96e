//! Weekday model.
//!
//! Seven fixed labels with two orderings:
//! - **Display/wire order** (`Ord`, [`Weekday::ALL`], codes 0..=6):
//!   Segunda..Domingo, as tables and encoded links list days.
//! - **Calendar adjacency** ([`Weekday::next`]/[`Weekday::previous`]): the
//!   cyclic week, wrapping Sabado→Domingo→Segunda, used by the inter-day
//!   rest rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the week.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    /// Monday.
    Segunda,
    /// Tuesday.
    Terca,
    /// Wednesday.
    Quarta,
    /// Thursday.
    Quinta,
    /// Friday.
    Sexta,
    /// Saturday.
    Sabado,
    /// Sunday.
    Domingo,
}

impl Weekday {
    /// All days in display/wire order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Segunda,
        Weekday::Terca,
        Weekday::Quarta,
        Weekday::Quinta,
        Weekday::Sexta,
        Weekday::Sabado,
        Weekday::Domingo,
    ];

    /// Wire code for the link codec (0..=6).
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Resolves a wire code back to a day.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Segunda => "Segunda",
            Weekday::Terca => "Terca",
            Weekday::Quarta => "Quarta",
            Weekday::Quinta => "Quinta",
            Weekday::Sexta => "Sexta",
            Weekday::Sabado => "Sabado",
            Weekday::Domingo => "Domingo",
        }
    }

    /// Next calendar day, wrapping Domingo→Segunda.
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % 7]
    }

    /// Previous calendar day, wrapping Segunda→Domingo.
    pub fn previous(self) -> Self {
        Self::ALL[(self as usize + 6) % 7]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
