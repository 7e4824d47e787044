//! # Check Digit
//!
//! Luhn-variant check digit over the first 12 digits. Digits at odd
//! 0-based positions are doubled (minus 9 when the result exceeds 9); the
//! check digit brings the total up to the next multiple of ten.

use crate::error::ZaidError;
use crate::format::{self, CHECK_DIGIT_POS, PAYLOAD_LENGTH};

/// Compute the check digit for a 12-digit payload.
///
/// # Errors
///
/// Returns [`ZaidError::InvalidInput`] unless `first12` is exactly 12 ASCII
/// digits.
pub fn compute_check_digit(first12: &str) -> Result<u8, ZaidError> {
    if first12.len() != PAYLOAD_LENGTH || !format::all_ascii_digits(first12) {
        return Err(ZaidError::InvalidInput(format!(
            "check digit input must be exactly {PAYLOAD_LENGTH} digits, got {first12:?}"
        )));
    }
    Ok(check_digit_of(first12.as_bytes()))
}

/// Returns true if `id` is 13 digits whose last digit matches the check
/// digit of the first 12. Never fails.
pub fn verify(id: &str) -> bool {
    if !format::is_well_formed(id) {
        return false;
    }
    let bytes = id.as_bytes();
    check_digit_of(&bytes[..PAYLOAD_LENGTH]) == bytes[CHECK_DIGIT_POS] - b'0'
}

/// Check digit over ASCII digit bytes. Caller guarantees the shape.
pub(crate) fn check_digit_of(payload: &[u8]) -> u8 {
    let total: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    ((10 - total % 10) % 10) as u8
}
