//! # Date Field Codec
//!
//! Two-way mapping between the six-digit `YYMMDD` field and a calendar date.
//!
//! ## Century Resolution
//!
//! The field carries a two-digit year. Given a reference date, a year above
//! the reference's two-digit year resolves to the 1900s; anything else
//! resolves to the 2000s. In other words the holder is assumed alive and as
//! young as the digits allow without being born in the future.
//!
//! This cannot tell a centenarian from a child: with a 2024 reference, the
//! field `100101` is always 2010-01-01, never 1910-01-01. The ambiguity is
//! inherent to a two-digit year and is accepted.
//!
//! Every function takes the reference date explicitly; nothing here reads
//! the system clock.

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;
use crate::format;

/// Length of the `YYMMDD` field.
pub const DATE_FIELD_LENGTH: usize = 6;

/// Resolve a two-digit year into a full year relative to `reference`.
pub fn resolve_century(yy: u32, reference: NaiveDate) -> i32 {
    let current_yy = reference.year().rem_euclid(100) as u32;
    let century = if yy > current_yy { 1900 } else { 2000 };
    century + yy as i32
}

/// Decode a `YYMMDD` field into a date of birth.
///
/// Returns `None` if the field is not six ASCII digits, does not name a real
/// calendar date in the resolved century, or falls after `reference`.
pub fn decode_date_field(field: &str, reference: NaiveDate) -> Option<NaiveDate> {
    resolve_date_field(field, reference).ok()
}

/// [`decode_date_field`] with the failure reason preserved.
pub(crate) fn resolve_date_field(
    field: &str,
    reference: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        field: field.to_string(),
    };

    if field.len() != DATE_FIELD_LENGTH || !format::all_ascii_digits(field) {
        return Err(invalid());
    }

    let yy = two_digits(&field[0..2]);
    let month = two_digits(&field[2..4]);
    let day = two_digits(&field[4..6]);

    let year = resolve_century(yy, reference);
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

    if date > reference {
        return Err(ValidationError::FutureDate {
            field: field.to_string(),
        });
    }
    Ok(date)
}

/// Encode a date as `YYMMDD`.
///
/// Only the last two digits of the year survive. Callers must keep the
/// year at or after 1900; the generator enforces this.
pub fn encode_date_field(date: NaiveDate) -> String {
    format!(
        "{:02}{:02}{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    )
}

/// Age in completed years on `reference`. Zero if `dob` is after it.
pub fn age_on(dob: NaiveDate, reference: NaiveDate) -> u32 {
    let mut years = reference.year() - dob.year();
    if (reference.month(), reference.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

// Input is two ASCII digits, already checked.
fn two_digits(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn century_above_current_year_is_1900s() {
        let reference = ymd(2024, 6, 15);
        assert_eq!(decode_date_field("990101", reference), Some(ymd(1999, 1, 1)));
        assert_eq!(decode_date_field("250101", reference), Some(ymd(1925, 1, 1)));
    }

    #[test]
    fn century_at_or_below_current_year_is_2000s() {
        let reference = ymd(2024, 6, 15);
        assert_eq!(decode_date_field("050101", reference), Some(ymd(2005, 1, 1)));
        assert_eq!(decode_date_field("000229", reference), Some(ymd(2000, 2, 29)));
        assert_eq!(decode_date_field("240101", reference), Some(ymd(2024, 1, 1)));
    }

    #[test]
    fn current_two_digit_year_in_the_future_is_rejected() {
        // 24 resolves to 2024, and 2024-12-01 is after the reference.
        let reference = ymd(2024, 6, 15);
        assert_eq!(decode_date_field("241201", reference), None);
        assert_eq!(
            resolve_date_field("241201", reference),
            Err(ValidationError::FutureDate {
                field: "241201".into()
            })
        );
    }

    #[test]
    fn reference_day_itself_is_accepted() {
        let reference = ymd(2024, 6, 15);
        assert_eq!(decode_date_field("240615", reference), Some(reference));
        assert_eq!(decode_date_field("240616", reference), None);
    }

    #[test]
    fn impossible_dates_rejected() {
        let reference = ymd(2024, 6, 15);
        for field in ["801301", "800001", "800100", "800230", "800431", "990229"] {
            assert_eq!(decode_date_field(field, reference), None, "{field}");
        }
    }

    #[test]
    fn leap_day_follows_resolved_century() {
        let reference = ymd(2024, 6, 15);
        // 1996 and 2004 are leap years; 1900 would not be, 2000 is.
        assert_eq!(decode_date_field("960229", reference), Some(ymd(1996, 2, 29)));
        assert_eq!(decode_date_field("040229", reference), Some(ymd(2004, 2, 29)));
        assert_eq!(decode_date_field("000229", reference), Some(ymd(2000, 2, 29)));
    }

    #[test]
    fn malformed_field_rejected() {
        let reference = ymd(2024, 6, 15);
        for field in ["", "80010", "8001011", "80a101", "８00101"] {
            assert_eq!(decode_date_field(field, reference), None, "{field:?}");
        }
    }

    #[test]
    fn resolve_century_boundaries() {
        let reference = ymd(2000, 1, 1);
        assert_eq!(resolve_century(0, reference), 2000);
        assert_eq!(resolve_century(1, reference), 1901);
        assert_eq!(resolve_century(99, reference), 1999);
    }

    #[test]
    fn encode_pads_all_components() {
        assert_eq!(encode_date_field(ymd(1980, 1, 1)), "800101");
        assert_eq!(encode_date_field(ymd(2005, 11, 9)), "051109");
        assert_eq!(encode_date_field(ymd(1900, 12, 31)), "001231");
    }

    #[test]
    fn encode_then_decode_within_window() {
        let reference = ymd(2024, 6, 15);
        let dob = ymd(1987, 7, 23);
        assert_eq!(
            decode_date_field(&encode_date_field(dob), reference),
            Some(dob)
        );
    }

    #[test]
    fn age_counts_completed_years() {
        let dob = ymd(1980, 6, 15);
        assert_eq!(age_on(dob, ymd(2024, 6, 14)), 43);
        assert_eq!(age_on(dob, ymd(2024, 6, 15)), 44);
        assert_eq!(age_on(dob, ymd(2024, 12, 31)), 44);
        assert_eq!(age_on(dob, dob), 0);
        assert_eq!(age_on(ymd(2030, 1, 1), dob), 0);
    }
}
