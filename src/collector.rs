//! Interactive collection of a [`DisplayConfig`].

use std::{
    fmt,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use crate::{
    Result,
    config::{
        DisplayConfig, HardwareConfig, PromptDefaults, ScreenConfig, ServerConfig, UpdateConfig,
        WeatherConfig, WifiConfig,
    },
    persist,
    prompt::Prompter,
};

/// Where a setup run currently is. Runs only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Nothing asked yet.
    Start,
    /// Asking for WiFi credentials.
    CollectingWifi,
    /// Asking for the image URL.
    CollectingServer,
    /// Asking for weather location and units.
    CollectingWeather,
    /// Asking for the refresh interval.
    CollectingUpdate,
    /// Writing the configuration file.
    Persisting,
    /// Configuration written.
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::CollectingWifi => "wifi",
            Stage::CollectingServer => "server",
            Stage::CollectingWeather => "weather",
            Stage::CollectingUpdate => "update",
            Stage::Persisting => "persisting",
            Stage::Done => "done",
        };
        write!(f, "{name}")
    }
}

/// Asks the operator for every configurable value, in a fixed order.
pub struct ConfigCollector<R, W> {
    prompter: Prompter<R, W>,
    defaults: PromptDefaults,
    stage: Stage,
}

impl<R: BufRead, W: Write> ConfigCollector<R, W> {
    /// Creates a collector using the built-in prompt defaults.
    pub fn new(prompter: Prompter<R, W>) -> Self {
        Self::with_defaults(prompter, PromptDefaults::default())
    }

    /// Creates a collector with custom defaults for the optional prompts.
    pub fn with_defaults(prompter: Prompter<R, W>, defaults: PromptDefaults) -> Self {
        Self {
            prompter,
            defaults,
            stage: Stage::Start,
        }
    }

    /// The stage reached so far.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Runs the whole questionnaire and builds the configuration.
    ///
    /// Nothing is written to disk here; a failure leaves the filesystem
    /// untouched.
    ///
    /// # Errors
    /// Returns `SetupError::InvalidRefreshHours` or
    /// `SetupError::RefreshOverflow` if the refresh interval cannot be
    /// derived, and any prompt error (closed input, I/O failure).
    #[instrument(skip(self))]
    pub fn collect(&mut self) -> Result<DisplayConfig> {
        writeln!(
            self.prompter.output(),
            "=== Inkplate Smart Display Configuration Setup ==="
        )?;
        writeln!(self.prompter.output())?;

        let wifi = self.collect_wifi()?;
        let server = self.collect_server()?;
        let weather = self.collect_weather()?;
        let update = self.collect_update()?;

        info!(ssid = %wifi.ssid, url = %server.url, "Collected configuration");

        Ok(DisplayConfig {
            wifi,
            server,
            weather,
            update,
            display: ScreenConfig::default(),
            hardware: HardwareConfig::default(),
        })
    }

    /// Writes the collected configuration to `path` and echoes a summary on
    /// the prompter's output.
    ///
    /// # Errors
    /// Returns any error from [`persist::persist`].
    pub fn persist(&mut self, config: &DisplayConfig, path: &Path) -> Result<PathBuf> {
        debug!(from = %self.stage, to = %Stage::Persisting, "Advancing setup stage");
        self.stage = Stage::Persisting;

        let written = persist::persist(config, path, self.prompter.output())?;

        self.stage = Stage::Done;
        Ok(written)
    }

    /// Consumes the collector, handing back the prompter and its streams.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    fn collect_wifi(&mut self) -> Result<WifiConfig> {
        self.enter(Stage::CollectingWifi, "WiFi Configuration:")?;
        let ssid = self.prompter.prompt("WiFi SSID", None)?;
        let password = self.prompter.prompt("WiFi Password", None)?;
        writeln!(self.prompter.output())?;

        Ok(WifiConfig { ssid, password })
    }

    fn collect_server(&mut self) -> Result<ServerConfig> {
        self.enter(Stage::CollectingServer, "Image Server Configuration:")?;
        let url = self
            .prompter
            .prompt("Image URL (JPEG)", Some(self.defaults.server_url.as_str()))?;
        writeln!(self.prompter.output())?;

        Ok(ServerConfig { url })
    }

    fn collect_weather(&mut self) -> Result<WeatherConfig> {
        self.enter(Stage::CollectingWeather, "Weather Configuration:")?;
        writeln!(
            self.prompter.output(),
            "(You can find coordinates at https://www.latlong.net/)"
        )?;

        let city = self.prompter.prompt("City name", Some(self.defaults.city.as_str()))?;
        let latitude = self
            .prompter
            .prompt("Latitude", Some(self.defaults.latitude.as_str()))?;
        let longitude = self
            .prompter
            .prompt("Longitude", Some(self.defaults.longitude.as_str()))?;
        let units = self.prompter.prompt(
            "Temperature units (fahrenheit/celsius)",
            Some(self.defaults.units.as_str()),
        )?;
        writeln!(self.prompter.output())?;

        Ok(WeatherConfig {
            latitude,
            longitude,
            city,
            units,
        })
    }

    fn collect_update(&mut self) -> Result<UpdateConfig> {
        self.enter(Stage::CollectingUpdate, "Update Configuration:")?;
        let hours = self
            .prompter
            .prompt("Refresh interval (hours)", Some(self.defaults.refresh_hours.as_str()))?;
        let update = UpdateConfig::from_hours(&hours)?;
        writeln!(self.prompter.output())?;

        Ok(update)
    }

    fn enter(&mut self, stage: Stage, heading: &str) -> Result<()> {
        debug!(from = %self.stage, to = %stage, "Advancing setup stage");
        self.stage = stage;
        writeln!(self.prompter.output(), "{heading}")?;
        Ok(())
    }
}
