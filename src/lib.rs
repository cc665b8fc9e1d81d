//! Inkplate setup - interactive generator for the display's `config.json`.
//!
//! Asks the operator for WiFi credentials, the image URL, weather location
//! and a refresh interval, then writes the JSON file the firmware loads
//! from its filesystem image.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inkplate_setup::{collector::ConfigCollector, config::ConfigPaths, prompt::Prompter};
//!
//! let mut collector = ConfigCollector::new(Prompter::stdio());
//! let config = collector.collect()?;
//! collector.persist(&config, &ConfigPaths::default_output())?;
//! # Ok::<(), inkplate_setup::SetupError>(())
//! ```

/// Command-line interface.
pub mod cli;

/// Interactive questionnaire producing a configuration.
pub mod collector;

/// Configuration schema, defaults and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Writing the configuration file.
pub mod persist;

/// Line-oriented prompting.
pub mod prompt;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{Result, SetupError};
