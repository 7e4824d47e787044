//! # Decode Subcommand
//!
//! Prints the fields of a valid ID number as aligned text or JSON.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use zaid_core::{DecodedIdentity, Decoder, Validator};

use crate::EXIT_OK;

/// Output format for the decode command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable key/value lines.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

/// Arguments for the `zaid decode` subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// ID number to decode.
    pub id: String,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Execute the decode subcommand.
pub fn run_decode(args: &DecodeArgs, today: NaiveDate) -> Result<u8> {
    let validator = Validator::new(today);
    if let Err(e) = validator.check(&args.id) {
        bail!("{:?} is not a valid ID number: {e}", args.id);
    }
    let decoded = Decoder::with_validator(validator)
        .decode(&args.id)
        .with_context(|| format!("decoding {}", args.id))?;

    let output = match args.format {
        OutputFormat::Text => render_text(&decoded),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&decoded).context("serializing decoded identity")?
        }
    };
    println!("{output}");
    Ok(EXIT_OK)
}

/// Render a decoded identity as aligned `label: value` lines.
pub fn render_text(decoded: &DecodedIdentity) -> String {
    [
        format!("ID number:     {}", decoded.id_number),
        format!("Date of birth: {}", decoded.date_of_birth),
        format!("Age:           {}", decoded.age),
        format!("Sex:           {}", decoded.sex),
        format!(
            "Citizenship:   {} (digit {})",
            decoded.citizenship, decoded.citizenship_digit
        ),
        format!("Historical:    {}", decoded.historical_digit),
    ]
    .join("\n")
}
