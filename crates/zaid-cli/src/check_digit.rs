//! # Check Digit Subcommand
//!
//! Computes the check digit for a 12-digit payload.

use anyhow::{Context, Result};
use clap::Args;

use crate::EXIT_OK;

/// Arguments for the `zaid check-digit` subcommand.
#[derive(Args, Debug)]
pub struct CheckDigitArgs {
    /// The first 12 digits of an ID number.
    pub first12: String,
}

/// Execute the check-digit subcommand.
pub fn run_check_digit(args: &CheckDigitArgs) -> Result<u8> {
    let check = zaid_core::compute_check_digit(&args.first12)
        .with_context(|| format!("computing check digit for {:?}", args.first12))?;
    println!("check digit: {check}");
    println!("ID number:   {}{check}", args.first12);
    Ok(EXIT_OK)
}
