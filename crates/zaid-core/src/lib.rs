//! # zaid-core — South African ID Numbers
//!
//! Validation, decoding and generation of 13-digit South African national
//! identity numbers (`YYMMDD SSSS C A Z`: date of birth, sequence, citizenship,
//! historical digit, check digit).
//!
//! ## Layers
//!
//! - [`checksum`], [`format`], [`date`], [`fields`]: the building blocks,
//!   each usable on its own.
//! - [`Validator`], [`Decoder`], [`Generator`]: composed components bound
//!   to an explicit reference date. Use these when "today" must be fixed,
//!   e.g. in tests or batch jobs.
//! - The free functions in this module: the same operations bound to the
//!   system clock ([`today`]) and a thread-local random source.
//!
//! ## Failure Modes
//!
//! Predicates and extractors fail soft (`false`, [`Sex::Unknown`], `None`)
//! and are safe on untrusted input. Check digit computation and generation
//! fail hard with [`ZaidError`], since their inputs are under the caller's
//! control.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Logging goes through `tracing`; no subscriber is installed here.

pub mod checksum;
pub mod date;
pub mod decode;
pub mod error;
pub mod fields;
pub mod format;
pub mod generate;
pub mod identity;
pub mod validate;

use chrono::{NaiveDate, Utc};

pub use decode::{DecodedIdentity, Decoder};
pub use error::{ValidationError, ZaidError};
pub use fields::{Citizenship, CitizenshipFields, Sex};
pub use generate::{GenerateOptions, Generator};
pub use identity::IdNumber;
pub use validate::Validator;

/// The system reference date: today's calendar date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Returns true if `id` is a valid ID number today.
pub fn validate(id: &str) -> bool {
    Validator::new(today()).validate(id)
}

/// Decode `id` against today's date, or `None` if it is not valid.
pub fn decode(id: &str) -> Option<DecodedIdentity> {
    Decoder::new(today()).decode(id)
}

/// Generate a valid ID number for the given holder, using today's date and
/// the thread-local random source.
///
/// # Errors
///
/// See [`Generator::generate`].
pub fn generate_id_number(
    dob: NaiveDate,
    sex: Sex,
    is_citizen: bool,
    options: &GenerateOptions,
) -> Result<String, ZaidError> {
    Generator::new(today(), rand::thread_rng())
        .generate(dob, sex, is_citizen, options)
        .map(IdNumber::into_string)
}

/// Generate a valid ID number for a random holder.
///
/// # Errors
///
/// See [`Generator::generate_random`].
pub fn generate_random_id_number() -> Result<String, ZaidError> {
    Generator::new(today(), rand::thread_rng())
        .generate_random()
        .map(IdNumber::into_string)
}

/// Compute the check digit for the first 12 digits of an ID number.
///
/// # Errors
///
/// [`ZaidError::InvalidInput`] unless `first12` is exactly 12 ASCII digits.
pub fn compute_check_digit(first12: &str) -> Result<u8, ZaidError> {
    checksum::compute_check_digit(first12)
}
