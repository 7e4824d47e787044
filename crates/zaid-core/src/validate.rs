//! # Validation
//!
//! An ID number is valid when, in this order:
//!
//! 1. it is exactly 13 ASCII digits,
//! 2. its date field decodes to a real date no later than the reference,
//! 3. its check digit verifies.
//!
//! The order is load-bearing: malformed input never reaches date parsing or
//! checksum code.

use chrono::NaiveDate;

use crate::checksum;
use crate::date;
use crate::error::ValidationError;
use crate::format::{self, CHECK_DIGIT_POS, DATE_FIELD, PAYLOAD_LENGTH};

/// Validates ID numbers against a fixed reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    reference: NaiveDate,
}

impl Validator {
    /// Create a validator that treats `reference` as "today".
    pub fn new(reference: NaiveDate) -> Self {
        Self { reference }
    }

    /// The reference date used for century resolution and future-date checks.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Pass/fail verdict. Never panics on any input.
    pub fn validate(&self, id: &str) -> bool {
        format::is_well_formed(id) && self.date_field_valid(id) && checksum::verify(id)
    }

    /// Like [`Validator::validate`], but reports the first failing check.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first check that fails.
    pub fn check(&self, id: &str) -> Result<(), ValidationError> {
        format::check_structure(id)?;
        date::resolve_date_field(&id[DATE_FIELD], self.reference)?;

        let bytes = id.as_bytes();
        let expected = checksum::check_digit_of(&bytes[..PAYLOAD_LENGTH]);
        let actual = bytes[CHECK_DIGIT_POS] - b'0';
        if expected != actual {
            return Err(ValidationError::ChecksumMismatch { expected, actual });
        }
        Ok(())
    }

    /// Returns true if the leading `YYMMDD` field decodes against the
    /// reference date. False for strings too short to hold the field.
    pub fn date_field_valid(&self, id: &str) -> bool {
        id.get(DATE_FIELD)
            .and_then(|field| date::decode_date_field(field, self.reference))
            .is_some()
    }
}
