//! Command-line interface.
//!
//! The default command runs the interactive setup. `check` inspects an
//! existing file and `schema` prints the file's JSON Schema.

mod args;
pub mod formatting;


use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use schemars::schema_for;
use tracing::{debug, info};

use crate::{
    Result,
    collector::ConfigCollector,
    config::{ConfigIssue, ConfigPaths, DisplayConfig, PromptDefaults},
    prompt::Prompter,
};

pub use args::{Cli, Command, SetupArgs};
use formatting::{format_header, format_issue, format_success};

impl Cli {
    /// Runs the selected command against the process's standard streams.
    ///
    /// # Errors
    /// Returns error if the selected command fails.
    pub fn execute(self) -> Result<ExitCode> {
        match self.command {
            None => {
                run_setup(&self.setup, Prompter::stdio())?;
                Ok(ExitCode::SUCCESS)
            }
            Some(Command::Check { path }) => {
                let path = path.unwrap_or_else(ConfigPaths::default_output);
                let configured = run_check(&path, &mut io::stdout().lock())?;
                Ok(if configured {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                })
            }
            Some(Command::Schema) => {
                println!("{}", schema_json()?);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Collects answers through `prompter` and writes the configuration.
///
/// Returns the path written.
///
/// # Errors
/// Returns error if the defaults file is unreadable, an answer cannot be
/// used, or the file cannot be written. Nothing is written on error
/// before the write step.
pub fn run_setup<R: BufRead, W: Write>(
    args: &SetupArgs,
    prompter: Prompter<R, W>,
) -> Result<PathBuf> {
    let defaults = match &args.defaults {
        Some(path) => PromptDefaults::load(path)?,
        None => PromptDefaults::default(),
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(ConfigPaths::default_output);
    debug!(output = %output.display(), "Starting interactive setup");

    let mut collector = ConfigCollector::with_defaults(prompter, defaults);
    let config = collector.collect()?;
    collector.persist(&config, &output)
}

/// Loads the configuration at `path` and reports every finding on `out`.
///
/// Returns whether the device would accept the configuration. A missing
/// file is a blocking finding, not an error.
///
/// # Errors
/// Returns error if an existing file cannot be read or parsed, or `out` fails.
pub fn run_check<W: Write>(path: &Path, out: &mut W) -> Result<bool> {
    writeln!(out, "{}", format_header(&format!("Checking {}", path.display())))?;

    if !path.exists() {
        info!(path = %path.display(), "Configuration file missing");
        writeln!(out, "{}", format_issue(&ConfigIssue::missing_file()))?;
        return Ok(false);
    }

    let config = DisplayConfig::load(path)?;
    let issues = config.issues();
    info!(path = %path.display(), issues = issues.len(), "Checked configuration");

    for issue in &issues {
        writeln!(out, "{}", format_issue(issue))?;
    }

    let configured = config.is_configured();
    if configured {
        writeln!(out, "{}", format_success("Configuration appears valid."))?;
    }

    Ok(configured)
}

/// Returns the JSON Schema of [`DisplayConfig`], pretty-printed.
///
/// # Errors
/// Returns error if the schema cannot be serialized.
pub fn schema_json() -> Result<String> {
    let schema = schema_for!(DisplayConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
