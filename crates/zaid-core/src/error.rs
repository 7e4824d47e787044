//! # Error Types
//!
//! Two error families, matching the two ways callers reach this crate:
//!
//! - [`ZaidError`] is returned by the hard-fail paths (check digit
//!   computation and generation) whose inputs are caller-controlled. An
//!   error there points at a programming mistake, not at untrusted input.
//! - [`ValidationError`] explains why an untrusted string is not a valid ID
//!   number. The soft-fail predicates (`validate`, the field extractors)
//!   never surface it; it backs [`Validator::check`](crate::Validator::check)
//!   and [`IdNumber`](crate::IdNumber) parsing.

use thiserror::Error;

/// Error returned by check digit computation and ID generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZaidError {
    /// Input to a utility function is not in the required shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A generation parameter is outside its permitted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Every generation attempt produced a number that failed validation.
    ///
    /// Not retryable: the same inputs fail the same way.
    #[error("could not generate a valid ID number after {attempts} attempts")]
    GenerationExhausted {
        /// Number of attempts made before giving up.
        attempts: u32,
    },
}

/// Reason an ID number string failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input string is empty.
    #[error("ID number cannot be empty")]
    Empty,

    /// The input is not exactly 13 characters long.
    #[error("ID number must be 13 digits, got {actual} characters")]
    InvalidLength {
        /// Observed length in bytes.
        actual: usize,
    },

    /// A character that is not an ASCII digit was found.
    #[error("non-digit character at position {position}")]
    NonDigit {
        /// Byte offset of the first offending character.
        position: usize,
    },

    /// The `YYMMDD` field is not a real calendar date.
    #[error("date field {field:?} is not a valid calendar date")]
    InvalidDate {
        /// The raw six-digit date field.
        field: String,
    },

    /// The `YYMMDD` field resolves to a date after the reference date.
    #[error("date field {field:?} resolves to a date in the future")]
    FutureDate {
        /// The raw six-digit date field.
        field: String,
    },

    /// The final digit does not match the computed check digit.
    #[error("check digit mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// Check digit computed over the first 12 digits.
        expected: u8,
        /// Check digit found in the input.
        actual: u8,
    },
}

impl ValidationError {
    /// Returns true if the input failed a structural check (emptiness,
    /// length, or character set) before any field was interpreted.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ValidationError::Empty
                | ValidationError::InvalidLength { .. }
                | ValidationError::NonDigit { .. }
        )
    }
}
