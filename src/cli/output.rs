//! Handles all user-facing output for the CLI.
//!
//! Parsed values go to stdout, optionally colorized. Failures are rendered as
//! `miette` reports on stderr, or folded into the JSON record in `--json` mode.

use std::io::{self, Write};

use miette::Report;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::args::ColorMode;
use crate::errors::ParseError;

/// Resolves the requested mode against whether `stream` is a terminal.
pub fn color_choice(mode: ColorMode, stream: atty::Stream) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if atty::is(stream) => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

// ============================================================================
// JSON RECORDS
// ============================================================================

/// One line of `--json` output.
#[derive(Debug, Serialize)]
pub struct ParseRecord<'a> {
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorRecord>,
}

#[derive(Debug, Serialize)]
pub struct ErrorRecord {
    pub kind: &'static str,
    pub message: String,
}

impl<'a> ParseRecord<'a> {
    pub fn new(input: &'a str, result: &Result<i64, ParseError>) -> Self {
        match result {
            Ok(value) => Self {
                input,
                value: Some(*value),
                error: None,
            },
            Err(e) => Self {
                input,
                value: None,
                error: Some(ErrorRecord {
                    kind: e.kind().as_str(),
                    message: e.to_string(),
                }),
            },
        }
    }
}

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

pub fn print_value(stdout: &mut StandardStream, value: i64) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stdout, "{value}")?;
    stdout.reset()?;
    writeln!(stdout)
}

pub fn print_json(
    stdout: &mut StandardStream,
    record: &ParseRecord<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    let line = serde_json::to_string(record)?;
    writeln!(stdout, "{line}")?;
    Ok(())
}

/// Renders a parse failure through the installed `miette` hook.
pub fn print_error(error: ParseError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
