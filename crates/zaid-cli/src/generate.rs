//! # Generate Subcommand
//!
//! Prints freshly generated ID numbers, one per line. With `--dob` and
//! `--sex` the holder is fixed; without them each number belongs to a
//! random holder. `--seed` makes the output reproducible.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use zaid_core::{GenerateOptions, Generator, IdNumber, Sex};

use crate::EXIT_OK;

/// Sex accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SexArg {
    /// Sequence drawn from 0000-4999.
    Female,
    /// Sequence drawn from 5000-9999.
    Male,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Female => Sex::Female,
            SexArg::Male => Sex::Male,
        }
    }
}

/// Arguments for the `zaid generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Date of birth (YYYY-MM-DD). Omit for a random holder.
    #[arg(long, requires = "sex")]
    pub dob: Option<NaiveDate>,

    /// Sex of the holder.
    #[arg(long, value_enum, requires = "dob")]
    pub sex: Option<SexArg>,

    /// Mark the holder as a permanent resident instead of a citizen.
    #[arg(long, requires = "dob")]
    pub permanent_resident: bool,

    /// Fixed sequence number (0-9999).
    #[arg(long, requires = "dob", value_parser = clap::value_parser!(u16).range(0..=9999))]
    pub sequence: Option<u16>,

    /// Fixed historical digit (0-9).
    #[arg(long, requires = "dob", value_parser = clap::value_parser!(u8).range(0..=9))]
    pub historical_digit: Option<u8>,

    /// Number of ID numbers to generate.
    #[arg(long, default_value_t = 1)]
    pub count: u32,

    /// Seed for the random source.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    /// Generation options from the fixed-field flags.
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            sequence: self.sequence,
            historical_digit: self.historical_digit,
        }
    }
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, today: NaiveDate) -> Result<u8> {
    for id in generate_batch(args, today)? {
        println!("{id}");
    }
    Ok(EXIT_OK)
}

/// Generate `args.count` numbers without printing them.
pub fn generate_batch(args: &GenerateArgs, today: NaiveDate) -> Result<Vec<IdNumber>> {
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut generator = Generator::new(today, rng);
    let options = args.options();

    (0..args.count)
        .map(|i| {
            let result = match (args.dob, args.sex) {
                (Some(dob), Some(sex)) => {
                    generator.generate(dob, sex.into(), !args.permanent_resident, &options)
                }
                _ => generator.generate_random(),
            };
            result.with_context(|| format!("generating ID number {} of {}", i + 1, args.count))
        })
        .collect()
}
