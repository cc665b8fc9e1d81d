mod defaults;
mod device;
mod network;
mod paths;
mod validation;
mod weather;

#[cfg(test)]
mod tests;

use std::{fs, path::Path};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Result, SetupError};

pub use defaults::PromptDefaults;
pub use device::{
    DISPLAY_WIDTH, HardwareConfig, MS_PER_HOUR, SIDEBAR_WIDTH_PCT, ScreenConfig, UpdateConfig,
    WAKE_BUTTON_PIN,
};
pub use network::{ServerConfig, WifiConfig};
pub use paths::ConfigPaths;
pub use validation::{ConfigIssue, Severity};
pub use weather::WeatherConfig;

/// Device configuration consumed by the display firmware.
///
/// Field names and nesting are the firmware's contract: the serialized
/// form must keep these exact keys in this exact order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DisplayConfig {
    /// WiFi credentials.
    pub wifi: WifiConfig,

    /// Image source.
    pub server: ServerConfig,

    /// Weather lookup location and units.
    pub weather: WeatherConfig,

    /// Refresh schedule.
    pub update: UpdateConfig,

    /// Panel geometry. Fixed in this tool.
    pub display: ScreenConfig,

    /// Board wiring. Fixed in this tool.
    pub hardware: HardwareConfig,
}

impl DisplayConfig {
    /// Serializes the configuration as 2-space indented JSON.
    ///
    /// The output carries no trailing newline.
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and parses a configuration file previously written by this tool.
    ///
    /// # Errors
    /// Returns `SetupError::IoError` if the file cannot be read, or
    /// `SetupError::JsonParseError` if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SetupError::io_at(e, path))?;
        serde_json::from_str(&content).map_err(|e| SetupError::json_parse(e, Some(path)))
    }
}
