//! # ID Number Newtype
//!
//! [`IdNumber`] holds a string that passed full validation. Field accessors
//! rely on that: positions are fixed and every byte is an ASCII digit.
//!
//! ## Construction
//!
//! - [`IdNumber::parse`] validates against an explicit reference date.
//! - [`FromStr`](std::str::FromStr) and `Deserialize` validate against
//!   [`today()`](crate::today). Invalid strings are rejected at
//!   deserialization time, not silently accepted.
//! - The generator builds values after its own validation gate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::format::{CHECK_DIGIT_POS, CITIZENSHIP_POS, DATE_FIELD, HISTORICAL_POS, SEQUENCE_FIELD};
use crate::validate::Validator;

/// A validated 13-digit South African ID number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IdNumber(String);

impl IdNumber {
    /// Validate `value` against `reference` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failing check.
    pub fn parse(value: impl Into<String>, reference: NaiveDate) -> Result<Self, ValidationError> {
        let s = value.into();
        Validator::new(reference).check(&s)?;
        Ok(Self(s))
    }

    /// Wrap a string the caller has already validated.
    pub(crate) fn from_validated(s: String) -> Self {
        Self(s)
    }

    /// The 13-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the 13-digit string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// The raw `YYMMDD` field.
    pub fn date_field(&self) -> &str {
        &self.0[DATE_FIELD]
    }

    /// The four-digit sequence number.
    pub fn sequence(&self) -> u16 {
        self.0[SEQUENCE_FIELD]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
    }

    /// The raw citizenship digit.
    pub fn citizenship_digit(&self) -> u8 {
        self.digit(CITIZENSHIP_POS)
    }

    /// The raw historical digit.
    pub fn historical_digit(&self) -> u8 {
        self.digit(HISTORICAL_POS)
    }

    /// The check digit.
    pub fn check_digit(&self) -> u8 {
        self.digit(CHECK_DIGIT_POS)
    }

    fn digit(&self, pos: usize) -> u8 {
        self.0.as_bytes()[pos] - b'0'
    }
}

impl std::fmt::Display for IdNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for IdNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, crate::today())
    }
}

impl AsRef<str> for IdNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<IdNumber> for String {
    fn from(id: IdNumber) -> Self {
        id.0
    }
}

impl<'de> Deserialize<'de> for IdNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
