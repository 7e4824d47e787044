//! # Decoding
//!
//! Turns a valid ID number into its fields. Decoding is defined only for
//! numbers that pass [`Validator::validate`]; anything else yields `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date;
use crate::fields::{self, Citizenship, Sex};
use crate::format::DATE_FIELD;
use crate::identity::IdNumber;
use crate::validate::Validator;

/// Fields decoded from a valid ID number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedIdentity {
    /// The number itself.
    pub id_number: IdNumber,
    /// Date of birth with the century resolved against the reference date.
    pub date_of_birth: NaiveDate,
    /// Completed years on the reference date.
    pub age: u32,
    /// Sex from the sequence field.
    pub sex: Sex,
    /// Citizenship status.
    pub citizenship: Citizenship,
    /// Raw citizenship digit.
    pub citizenship_digit: u8,
    /// Raw historical digit.
    pub historical_digit: u8,
}

impl DecodedIdentity {
    /// Returns true if the holder is a citizen.
    pub fn is_citizen(&self) -> bool {
        self.citizenship.is_citizen()
    }
}

/// Decodes ID numbers against a fixed reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    validator: Validator,
}

impl Decoder {
    /// Create a decoder that treats `reference` as "today".
    pub fn new(reference: NaiveDate) -> Self {
        Self::with_validator(Validator::new(reference))
    }

    /// Create a decoder sharing an existing validator's reference date.
    pub fn with_validator(validator: Validator) -> Self {
        Self { validator }
    }

    /// Decode `id`, or `None` if it is not a valid ID number.
    pub fn decode(&self, id: &str) -> Option<DecodedIdentity> {
        if !self.validator.validate(id) {
            return None;
        }
        let reference = self.validator.reference();
        let date_of_birth = date::decode_date_field(&id[DATE_FIELD], reference)?;
        let citizenship = fields::extract_citizenship(id)?;

        Some(DecodedIdentity {
            id_number: IdNumber::from_validated(id.to_string()),
            date_of_birth,
            age: date::age_on(date_of_birth, reference),
            sex: fields::extract_sex(id),
            citizenship: citizenship.citizenship,
            citizenship_digit: citizenship.citizenship_digit,
            historical_digit: citizenship.historical_digit,
        })
    }
}
