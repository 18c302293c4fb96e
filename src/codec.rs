//! Shareable-link schedule codec.
//!
//! Serializes a schedule into a compact delimited string suitable for a
//! URL query value and back. Each slot becomes
//! `<day>-<id>-<HH_MM>-<HH_MM>-<company>` with numeric day/company codes
//! and ':' replaced by '_'; slots of one day are joined by ',' and days
//! by ';'.
//!
//! Decoding is strict: any malformed token, unknown code, invalid time,
//! or duplicate id fails the whole decode with a [`DecodeError`] and
//! yields no partially populated schedule. Numeric fields must use their
//! canonical spelling — ASCII digits only, no sign, no leading zeros —
//! and ids must leave room for a successor, so every string the encoder
//! emits decodes and little else does. A successful decode leaves
//! the id counter past the largest restored id, so later insertions get
//! fresh ids.

use thiserror::Error;

use crate::models::{Company, Schedule, Slot, TimeError, TimeOfDay, Weekday};

/// Errors from decoding a shareable-link string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A token does not have the five '-'-separated fields.
    #[error("malformed slot token {token:?} (expected day-id-start-end-company)")]
    MalformedToken {
        /// The offending token.
        token: String,
    },
    /// The id field is not an unsigned integer.
    #[error("invalid slot id {field:?}")]
    InvalidId {
        /// The offending field.
        field: String,
    },
    /// The day field is not a known day code.
    #[error("unknown day code {field:?}")]
    UnknownDayCode {
        /// The offending field.
        field: String,
    },
    /// The company field is not a known company code.
    #[error("unknown company code {field:?}")]
    UnknownCompanyCode {
        /// The offending field.
        field: String,
    },
    /// A time field failed to parse or the interval is inverted.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Two tokens carry the same slot id.
    #[error("duplicate slot id {id}")]
    DuplicateId {
        /// The repeated id.
        id: u32,
    },
}

/// Encodes a schedule as the shareable-link string.
///
/// Days appear in display order, slots in start order; an empty schedule
/// encodes as the empty string.
pub fn encode(schedule: &Schedule) -> String {
    let days: Vec<String> = schedule
        .days()
        .map(|(day, slots)| {
            slots
                .iter()
                .map(|slot| {
                    format!(
                        "{}-{}-{}-{}-{}",
                        day.code(),
                        slot.id,
                        underscored(slot.start),
                        underscored(slot.end),
                        slot.company.code()
                    )
                })
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    days.join(";")
}

/// Decodes a shareable-link string into a schedule.
///
/// The empty (or all-whitespace) string decodes to an empty schedule.
pub fn decode(text: &str) -> Result<Schedule, DecodeError> {
    let mut schedule = Schedule::new();
    let text = text.trim();
    if text.is_empty() {
        return Ok(schedule);
    }

    let mut seen_ids = std::collections::HashSet::new();
    for token in text.split(';').flat_map(|segment| segment.split(',')) {
        let (day, slot) = decode_token(token)?;
        if !seen_ids.insert(slot.id) {
            return Err(DecodeError::DuplicateId { id: slot.id });
        }
        schedule.restore(day, slot);
    }
    Ok(schedule)
}

fn decode_token(token: &str) -> Result<(Weekday, Slot), DecodeError> {
    let fields: Vec<&str> = token.split('-').collect();
    let &[day, id, start, end, company] = fields.as_slice() else {
        return Err(DecodeError::MalformedToken {
            token: token.to_string(),
        });
    };

    let day = canonical_number(day)
        .and_then(|code| u8::try_from(code).ok())
        .and_then(Weekday::from_code)
        .ok_or_else(|| DecodeError::UnknownDayCode {
            field: day.to_string(),
        })?;
    let id = parse_slot_id(id)?;
    let start = TimeOfDay::parse(&start.replace('_', ":"))?;
    let end = TimeOfDay::parse(&end.replace('_', ":"))?;
    let company = canonical_number(company)
        .and_then(|code| u8::try_from(code).ok())
        .and_then(Company::from_code)
        .ok_or_else(|| DecodeError::UnknownCompanyCode {
            field: company.to_string(),
        })?;

    Ok((day, Slot::new(id, start, end, company)?))
}

fn parse_slot_id(field: &str) -> Result<u32, DecodeError> {
    // u32::MAX is rejected so the restored id counter always has a fresh
    // id left to hand out.
    match canonical_number(field) {
        Some(id) if id < u32::MAX => Ok(id),
        _ => Err(DecodeError::InvalidId {
            field: field.to_string(),
        }),
    }
}

/// Parses a numeric field in its one canonical spelling: ASCII digits
/// only, no sign, no leading zeros. Rejects `"+7"` and `"007"` where
/// `str::parse` would accept them.
fn canonical_number(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if field.len() > 1 && field.starts_with('0') {
        return None;
    }
    field.parse().ok()
}

fn underscored(time: TimeOfDay) -> String {
    format!("{:02}_{:02}", time.hour(), time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(text: &str) -> TimeOfDay {
        TimeOfDay::parse(text).unwrap()
    }

    fn sample() -> Schedule {
        let mut s = Schedule::new();
        s.insert(Weekday::Segunda, t("08:00"), t("12:00"), Company::Ufsj1)
            .unwrap();
        s.insert(Weekday::Segunda, t("13:00"), t("17:00"), Company::Ufsj2)
            .unwrap();
        s.insert(Weekday::Domingo, t("09:30"), t("11:00"), Company::Deslocamento)
            .unwrap();
        s
    }

    #[test]
    fn test_encode_format() {
        let encoded = encode(&sample());
        assert_eq!(
            encoded,
            "0-1-08_00-12_00-0,0-2-13_00-17_00-1;6-3-09_30-11_00-6"
        );
    }

    #[test]
    fn test_empty_round_trip() {
        assert_eq!(encode(&Schedule::new()), "");
        assert_eq!(decode("").unwrap(), Schedule::new());
        assert_eq!(decode("   ").unwrap(), Schedule::new());
    }

    #[test]
    fn test_round_trip_preserves_schedule() {
        let s = sample();
        let back = decode(&encode(&s)).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_round_trip_after_removal() {
        let mut s = sample();
        assert!(s.remove(1));
        let back = decode(&encode(&s)).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_decoded_schedule_keeps_ids_fresh() {
        let mut s = decode("0-5-08_00-12_00-0").unwrap();
        let id = s
            .insert(Weekday::Terca, t("09:00"), t("10:00"), Company::Ufsj1)
            .unwrap();
        assert_eq!(id, 6);
    }

    #[test]
    fn test_decode_sorts_within_day() {
        let s = decode("0-1-14_00-16_00-0,0-2-08_00-10_00-1").unwrap();
        let starts: Vec<_> = s.slots(Weekday::Segunda).iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![t("08:00"), t("14:00")]);
    }

    #[test]
    fn test_decode_rejects_malformed_token() {
        for text in ["banana", "0-1-08_00", "0-1-08_00-12_00-0-9"] {
            assert!(
                matches!(decode(text), Err(DecodeError::MalformedToken { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_rejects_unknown_codes() {
        assert!(matches!(
            decode("9-1-08_00-12_00-0"),
            Err(DecodeError::UnknownDayCode { .. })
        ));
        assert!(matches!(
            decode("0-1-08_00-12_00-9"),
            Err(DecodeError::UnknownCompanyCode { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_bad_id_and_times() {
        assert!(matches!(
            decode("0-x-08_00-12_00-0"),
            Err(DecodeError::InvalidId { .. })
        ));
        assert!(matches!(
            decode("0-1-25_00-12_00-0"),
            Err(DecodeError::Time(TimeError::OutOfRange { .. }))
        ));
        assert!(matches!(
            decode("0-1-12_00-08_00-0"),
            Err(DecodeError::Time(TimeError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn test_decode_rejects_max_id_without_panicking() {
        // u32::MAX would leave the id counter nowhere to go; the token is
        // syntactically valid but must fail cleanly, not overflow.
        assert_eq!(
            decode("0-4294967295-08_00-12_00-0"),
            Err(DecodeError::InvalidId {
                field: "4294967295".to_string()
            })
        );
        let s = decode("0-4294967294-08_00-12_00-0").unwrap();
        assert_eq!(s.slots(Weekday::Segunda)[0].id, u32::MAX - 1);
    }

    #[test]
    fn test_decode_rejects_non_canonical_numbers() {
        for text in ["0-+7-08_00-12_00-0", "0-007-08_00-12_00-0"] {
            assert!(
                matches!(decode(text), Err(DecodeError::InvalidId { .. })),
                "{text:?} should be rejected"
            );
        }
        assert!(matches!(
            decode("00-1-08_00-12_00-0"),
            Err(DecodeError::UnknownDayCode { .. })
        ));
        assert!(matches!(
            decode("0-1-08_00-12_00-06"),
            Err(DecodeError::UnknownCompanyCode { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        assert_eq!(
            decode("0-1-08_00-12_00-0;1-1-08_00-12_00-0"),
            Err(DecodeError::DuplicateId { id: 1 })
        );
    }

    #[test]
    fn test_decode_fails_whole_string_on_late_error() {
        // A valid prefix must not leak into a partially populated schedule.
        assert!(decode("0-1-08_00-12_00-0;oops").is_err());
    }
}
