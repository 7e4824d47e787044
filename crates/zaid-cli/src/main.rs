//! # zaid CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, resolves
//! the reference date and dispatches to subcommand handlers.

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zaid_cli::check_digit::{run_check_digit, CheckDigitArgs};
use zaid_cli::decode::{run_decode, DecodeArgs};
use zaid_cli::generate::{run_generate, GenerateArgs};
use zaid_cli::validate::{run_validate, ValidateArgs};

/// South African ID number toolkit.
///
/// Validates, decodes and generates 13-digit South African national
/// identity numbers.
#[derive(Parser, Debug)]
#[command(name = "zaid", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Reference date (YYYY-MM-DD) used as "today". Defaults to the
    /// current UTC date.
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one or more ID numbers and report why invalid ones fail.
    Validate(ValidateArgs),

    /// Decode date of birth, age, sex and citizenship from an ID number.
    Decode(DecodeArgs),

    /// Generate valid ID numbers.
    Generate(GenerateArgs),

    /// Compute the check digit for the first 12 digits of an ID number.
    CheckDigit(CheckDigitArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let today = cli.today.unwrap_or_else(zaid_core::today);
    tracing::debug!(%today, "resolved reference date");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, today),
        Commands::Decode(args) => run_decode(&args, today),
        Commands::Generate(args) => run_generate(&args, today),
        Commands::CheckDigit(args) => run_check_digit(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
