//! # Validate Subcommand
//!
//! Prints one verdict line per input number. Exits non-zero if any input
//! is invalid.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use zaid_core::{ValidationError, Validator};

use crate::{EXIT_OK, EXIT_REJECTED};

/// Arguments for the `zaid validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// ID numbers to validate.
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, today: NaiveDate) -> Result<u8> {
    let validator = Validator::new(today);
    let mut rejected = 0usize;

    for id in &args.ids {
        let verdict = validator.check(id);
        if verdict.is_err() {
            rejected += 1;
        }
        println!("{}", format_verdict(id, &verdict));
    }

    tracing::info!(total = args.ids.len(), rejected, "validation complete");
    Ok(if rejected == 0 { EXIT_OK } else { EXIT_REJECTED })
}

/// `<id>: VALID` or `<id>: INVALID (<reason>)`.
pub fn verdict_line(validator: &Validator, id: &str) -> String {
    format_verdict(id, &validator.check(id))
}

fn format_verdict(id: &str, verdict: &Result<(), ValidationError>) -> String {
    match verdict {
        Ok(()) => format!("{id}: VALID"),
        Err(e) => format!("{id}: INVALID ({e})"),
    }
}
