//! lice CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: License, language or header not found
//! - 4: Missing template variable
//! - 5: Template unreadable or malformed
//! - 6: Clipboard unavailable

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lice_templates::TemplateError;

mod commands;
mod config;
mod output;

use commands::Cli;
use output::OutputError;

/// Exit codes, one per error kind
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const NOT_FOUND: u8 = 3;
    pub const MISSING_VARIABLE: u8 = 4;
    pub const TEMPLATE_ERROR: u8 = 5;
    pub const CLIPBOARD_ERROR: u8 = 6;
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "lice=debug" } else { "lice=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn").add_directive(
            default_directive
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
    });

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() {
                ExitCodes::INVALID_ARGS
            } else {
                ExitCodes::SUCCESS
            });
        }
    };

    init_logging(cli.verbose);

    match commands::execute(cli) {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Map the first structured error in the chain to its exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<TemplateError>() {
            return match err {
                TemplateError::NotFound { .. } => ExitCodes::NOT_FOUND,
                TemplateError::MissingVariable(_) => ExitCodes::MISSING_VARIABLE,
                TemplateError::Parse { .. } | TemplateError::Io { .. } => ExitCodes::TEMPLATE_ERROR,
                TemplateError::Json(_) => ExitCodes::GENERAL_ERROR,
            };
        }
        if let Some(err) = cause.downcast_ref::<OutputError>() {
            return match err {
                OutputError::Clipboard(_) => ExitCodes::CLIPBOARD_ERROR,
                OutputError::Io { .. } => ExitCodes::GENERAL_ERROR,
            };
        }
    }
    ExitCodes::GENERAL_ERROR
}
