//! # zaid-cli — Command-Line Interface for South African ID Numbers
//!
//! Provides the `zaid` binary. Argument parsing and output formatting live
//! here; every decision about validity is delegated to `zaid-core`.
//!
//! ## Subcommands
//!
//! - `zaid validate`: Verdict and failure reason for one or more numbers.
//! - `zaid decode`: Date of birth, age, sex and citizenship of a number.
//! - `zaid generate`: Valid numbers for a given or random holder.
//! - `zaid check-digit`: Check digit for a 12-digit payload.
//!
//! ```bash
//! zaid validate 8001015009087
//! zaid decode 8001015009087 --format json
//! zaid generate --dob 1990-04-12 --sex female --count 3
//! zaid --today 2024-06-15 generate --seed 7
//! ```

pub mod check_digit;
pub mod decode;
pub mod generate;
pub mod validate;

/// Exit code for a run where every input was accepted.
pub const EXIT_OK: u8 = 0;

/// Exit code for a run where at least one input was rejected.
pub const EXIT_REJECTED: u8 = 1;
