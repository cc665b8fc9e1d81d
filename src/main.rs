//! Inkplate setup - asks for the display's settings and writes `data/config.json`.

use std::process::ExitCode;

use clap::Parser;
use inkplate_setup::{
    cli::{Cli, formatting::format_error},
    tracing_config,
};
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = tracing_config::init() {
        eprintln!("{}: failed to initialise logging: {e}", format_error("Warning"));
    }

    match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Setup failed");
            eprintln!("{}: {e}", format_error("Error"));
            ExitCode::FAILURE
        }
    }
}
