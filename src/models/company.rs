//! Employment bond (vínculo) labels.
//!
//! Closed set of employer/category labels a slot can be booked under.
//! `Deslocamento` is commute/transit time: it still occupies clock time
//! (counted by the hour summaries, checked for overlaps) but is exempt
//! from the working-hours caps and the rest rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An employer or slot category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Company {
    /// First UFSJ bond.
    Ufsj1,
    /// Second UFSJ bond.
    Ufsj2,
    /// External bond 1.
    Externo1,
    /// External bond 2.
    Externo2,
    /// External bond 4.
    Externo4,
    /// External bond 5.
    Externo5,
    /// Commute/transit time.
    Deslocamento,
}

impl Company {
    /// All labels in wire-code order.
    pub const ALL: [Company; 7] = [
        Company::Ufsj1,
        Company::Ufsj2,
        Company::Externo1,
        Company::Externo2,
        Company::Externo4,
        Company::Externo5,
        Company::Deslocamento,
    ];

    /// Wire code for the link codec (0..=6).
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Resolves a wire code back to a label.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Company::Ufsj1 => "UFSJ 1",
            Company::Ufsj2 => "UFSJ 2",
            Company::Externo1 => "Externo 1",
            Company::Externo2 => "Externo 2",
            Company::Externo4 => "Externo 4",
            Company::Externo5 => "Externo 5",
            Company::Deslocamento => "Deslocamento",
        }
    }

    /// Whether this is the commute category, exempt from working-hour rules.
    #[inline]
    pub fn is_transit(self) -> bool {
        matches!(self, Company::Deslocamento)
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for company in Company::ALL {
            assert_eq!(Company::from_code(company.code()), Some(company));
        }
        assert_eq!(Company::from_code(7), None);
    }

    #[test]
    fn test_transit_flag() {
        assert!(Company::Deslocamento.is_transit());
        for company in Company::ALL {
            if company != Company::Deslocamento {
                assert!(!company.is_transit());
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Company::Ufsj1.to_string(), "UFSJ 1");
        assert_eq!(Company::Externo5.to_string(), "Externo 5");
        assert_eq!(Company::Deslocamento.to_string(), "Deslocamento");
    }
}
