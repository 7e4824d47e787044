//! # Structural Format
//!
//! Field layout of the 13-digit ID number and the structural predicate that
//! gates every field-position read.
//!
//! | range     | field                            |
//! |-----------|----------------------------------|
//! | `[0,6)`   | date of birth, `YYMMDD`          |
//! | `[6,10)`  | sequence number (sex indicator)  |
//! | `[10,11)` | citizenship flag                 |
//! | `[11,12)` | historical ("A") digit           |
//! | `[12,13)` | check digit                      |

use std::ops::Range;

use crate::error::ValidationError;

/// Total length of an ID number.
pub const ID_LENGTH: usize = 13;

/// Length of the prefix covered by the check digit.
pub const PAYLOAD_LENGTH: usize = 12;

/// Byte range of the `YYMMDD` date field.
pub const DATE_FIELD: Range<usize> = 0..6;

/// Byte range of the four-digit sequence field.
pub const SEQUENCE_FIELD: Range<usize> = 6..10;

/// Position of the citizenship digit.
pub const CITIZENSHIP_POS: usize = 10;

/// Position of the historical digit.
pub const HISTORICAL_POS: usize = 11;

/// Position of the check digit.
pub const CHECK_DIGIT_POS: usize = 12;

/// Returns true iff `s` is exactly 13 ASCII decimal digits.
pub fn is_well_formed(s: &str) -> bool {
    s.len() == ID_LENGTH && all_ascii_digits(s)
}

/// Structural check with a reason on failure.
pub(crate) fn check_structure(s: &str) -> Result<(), ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::Empty);
    }
    if s.len() != ID_LENGTH {
        return Err(ValidationError::InvalidLength { actual: s.len() });
    }
    if let Some(position) = s.bytes().position(|b| !b.is_ascii_digit()) {
        return Err(ValidationError::NonDigit { position });
    }
    Ok(())
}

pub(crate) fn all_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric value of the ASCII digit at `pos`, if there is one.
pub(crate) fn digit_at(s: &str, pos: usize) -> Option<u8> {
    s.as_bytes()
        .get(pos)
        .filter(|b| b.is_ascii_digit())
        .map(|b| b - b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_thirteen_digits() {
        assert!(is_well_formed("8001015009087"));
        assert!(is_well_formed("0000000000000"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("800101500908"));
        assert!(!is_well_formed("80010150090871"));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(!is_well_formed("80010150090 7"));
        assert!(!is_well_formed("8001015009O87"));
        assert!(!is_well_formed("-801015009087"));
    }

    #[test]
    fn rejects_multibyte_of_matching_char_count() {
        // 13 chars but more than 13 bytes.
        assert!(!is_well_formed("800101500908٧"));
    }

    #[test]
    fn check_structure_reports_reason() {
        assert_eq!(check_structure(""), Err(ValidationError::Empty));
        assert_eq!(
            check_structure("12345"),
            Err(ValidationError::InvalidLength { actual: 5 })
        );
        assert_eq!(
            check_structure("80010150x9087"),
            Err(ValidationError::NonDigit { position: 8 })
        );
        assert_eq!(check_structure("8001015009087"), Ok(()));
    }

    #[test]
    fn digit_at_bounds() {
        assert_eq!(digit_at("8001015009087", 0), Some(8));
        assert_eq!(digit_at("8001015009087", 12), Some(7));
        assert_eq!(digit_at("8001015009087", 13), None);
        assert_eq!(digit_at("80a", 2), None);
    }
}
