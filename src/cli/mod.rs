//! The digitfold command-line interface.
//!
//! A thin wrapper that parses each argument with [`IntegerParser`] and prints
//! the outcome. Exits with status 1 if any input fails to parse.

use std::io::Write;
use std::process;

use clap::Parser;
use miette::{Diagnostic, MietteHandlerOpts, ReportHandler};
use termcolor::{ColorChoice, StandardStream};

use crate::cli::args::{ColorMode, DigitfoldArgs};
use crate::cli::output::ParseRecord;
use crate::parser::IntegerParser;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = DigitfoldArgs::parse();
    install_report_hook(args.color);

    match parse_inputs(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Makes `miette` reports follow the `--color` setting.
fn install_report_hook(mode: ColorMode) {
    let color = !matches!(
        output::color_choice(mode, atty::Stream::Stderr),
        ColorChoice::Never
    );
    let installed = miette::set_hook(Box::new(
        move |_: &(dyn Diagnostic + 'static)| -> Box<dyn ReportHandler> {
            Box::new(MietteHandlerOpts::new().color(color).build())
        },
    ));
    if let Err(e) = installed {
        log::warn!("could not install diagnostic report hook: {e}");
    }
}

/// Parses every input and prints each outcome. Returns whether all succeeded.
fn parse_inputs(args: &DigitfoldArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let parser = IntegerParser::new();
    let mut stdout = StandardStream::stdout(output::color_choice(args.color, atty::Stream::Stdout));
    let mut all_parsed = true;

    for input in &args.inputs {
        log::debug!("parsing {input:?}");
        let result = parser.parse(input);
        if let Err(e) = &result {
            log::debug!("rejected {input:?}: {}", e.kind());
            all_parsed = false;
        }

        if args.json {
            output::print_json(&mut stdout, &ParseRecord::new(input, &result))?;
            continue;
        }
        match result {
            Ok(value) => output::print_value(&mut stdout, value)?,
            Err(e) => {
                // Keep stdout and stderr lines in input order on a shared terminal.
                stdout.flush()?;
                output::print_error(e);
            }
        }
    }

    Ok(all_parsed)
}
