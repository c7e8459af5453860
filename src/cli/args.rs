//! Defines the command-line arguments for the digitfold CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, ValueEnum};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "digitfold",
    version,
    about = "Parse decimal strings into signed 64-bit integers."
)]
pub struct DigitfoldArgs {
    /// Emit one JSON object per input instead of plain values.
    #[arg(long)]
    pub json: bool,

    /// When to colorize output.
    #[arg(long, value_enum, default_value = "auto", env = "DIGITFOLD_COLOR")]
    pub color: ColorMode,

    /// The decimal strings to parse, e.g. `42` or `-9223372036854775808`.
    ///
    /// Negative numbers and a lone `-` are taken as inputs. Other values
    /// starting with `-` must follow `--`.
    #[arg(required = true, allow_negative_numbers = true, value_name = "INPUT")]
    pub inputs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Colorize when stdout is a terminal
    Auto,
    Always,
    Never,
}
