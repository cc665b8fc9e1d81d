use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Creates the config.json consumed by the Inkplate smart display firmware.
///
/// Run without a subcommand to answer the setup questions interactively.
#[derive(Debug, Parser)]
#[command(
    name = "inkplate-setup",
    version,
    about,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Options for the interactive setup.
    #[command(flatten)]
    pub setup: SetupArgs,

    /// Optional non-interactive command.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options for the interactive setup.
#[derive(Debug, Clone, Default, Args)]
pub struct SetupArgs {
    /// Where to write the configuration [default: data/config.json]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML file overriding the defaults offered for optional prompts
    #[arg(short, long, value_name = "FILE")]
    pub defaults: Option<PathBuf>,
}

/// Non-interactive commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Check an existing configuration file the way the device does
    Check {
        /// Configuration file [default: data/config.json]
        path: Option<PathBuf>,
    },

    /// Print the JSON Schema of the configuration file
    Schema,
}
