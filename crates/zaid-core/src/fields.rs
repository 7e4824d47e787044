//! # Field Extraction
//!
//! Reads sex and citizenship from their fixed positions. Both extractors
//! fail soft: they can be called on arbitrary strings and answer with
//! [`Sex::Unknown`] or `None` instead of an error.

use serde::{Deserialize, Serialize};

use crate::format::{self, CITIZENSHIP_POS, HISTORICAL_POS, ID_LENGTH, SEQUENCE_FIELD};

/// First sequence value that denotes a male holder.
pub const MALE_SEQUENCE_THRESHOLD: u16 = 5000;

/// Sex as encoded in the sequence field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Sequence below 5000.
    Female,
    /// Sequence 5000 or above.
    Male,
    /// The sequence field could not be read.
    Unknown,
}

impl Sex {
    /// Interpret a sequence value.
    pub fn from_sequence(sequence: u16) -> Self {
        if sequence < MALE_SEQUENCE_THRESHOLD {
            Sex::Female
        } else {
            Sex::Male
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sex::Female => "female",
            Sex::Male => "male",
            Sex::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Citizenship status from the citizenship digit.
///
/// Only `0` (citizen) and `1` (permanent resident) are defined. Any other
/// digit is reported as [`Citizenship::PermanentResident`]; the raw digit
/// stays available in [`CitizenshipFields::citizenship_digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    /// Digit `0`.
    Citizen,
    /// Digit `1`, or any non-standard digit.
    PermanentResident,
}

impl Citizenship {
    /// Interpret a citizenship digit.
    pub fn from_digit(digit: u8) -> Self {
        if digit == 0 {
            Citizenship::Citizen
        } else {
            Citizenship::PermanentResident
        }
    }

    /// The digit written by the generator for this status.
    pub fn digit(self) -> u8 {
        match self {
            Citizenship::Citizen => 0,
            Citizenship::PermanentResident => 1,
        }
    }

    /// Returns true for [`Citizenship::Citizen`].
    pub fn is_citizen(self) -> bool {
        matches!(self, Citizenship::Citizen)
    }
}

impl From<bool> for Citizenship {
    fn from(is_citizen: bool) -> Self {
        if is_citizen {
            Citizenship::Citizen
        } else {
            Citizenship::PermanentResident
        }
    }
}

impl std::fmt::Display for Citizenship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Citizenship::Citizen => "citizen",
            Citizenship::PermanentResident => "permanent resident",
        };
        f.write_str(s)
    }
}

/// Citizenship and historical digits read from positions 10 and 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenshipFields {
    /// Interpreted citizenship status.
    pub citizenship: Citizenship,
    /// Raw digit at position 10.
    pub citizenship_digit: u8,
    /// Raw digit at position 11, carried through uninterpreted.
    pub historical_digit: u8,
}

/// Read the sex from the sequence field at `[6,10)`.
///
/// Returns [`Sex::Unknown`] if `id` is shorter than 10 bytes or the field
/// is not four ASCII digits.
pub fn extract_sex(id: &str) -> Sex {
    id.get(SEQUENCE_FIELD)
        .and_then(parse_sequence)
        .map_or(Sex::Unknown, Sex::from_sequence)
}

/// Read citizenship and historical digits.
///
/// Requires exactly 13 bytes; does not check the date or check digit, so
/// it is safe on well-formed but otherwise invalid numbers. Returns `None`
/// for any other length or when either position is not a digit.
pub fn extract_citizenship(id: &str) -> Option<CitizenshipFields> {
    if id.len() != ID_LENGTH {
        return None;
    }
    let citizenship_digit = format::digit_at(id, CITIZENSHIP_POS)?;
    let historical_digit = format::digit_at(id, HISTORICAL_POS)?;
    Some(CitizenshipFields {
        citizenship: Citizenship::from_digit(citizenship_digit),
        citizenship_digit,
        historical_digit,
    })
}

pub(crate) fn parse_sequence(field: &str) -> Option<u16> {
    if field.len() != SEQUENCE_FIELD.len() || !format::all_ascii_digits(field) {
        return None;
    }
    field.parse().ok()
}
