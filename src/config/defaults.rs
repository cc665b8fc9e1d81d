use std::{fs, path::Path};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, SetupError};

/// Answers used when the operator leaves an optional prompt empty.
///
/// Required fields (WiFi SSID and password) never take a default.
/// Can be overridden from a TOML file; keys missing from the file keep
/// their built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PromptDefaults {
    /// Image URL (JPEG).
    pub server_url: String,

    /// Weather city name.
    pub city: String,

    /// Weather latitude, as text.
    pub latitude: String,

    /// Weather longitude, as text.
    pub longitude: String,

    /// Temperature units.
    pub units: String,

    /// Refresh interval in hours, as text. Parsed after prompting.
    pub refresh_hours: String,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            server_url: "http://httpbin.org/image/jpeg".to_string(),
            city: "Seattle".to_string(),
            latitude: "47.6062".to_string(),
            longitude: "-122.3321".to_string(),
            units: "fahrenheit".to_string(),
            refresh_hours: "24".to_string(),
        }
    }
}

impl PromptDefaults {
    /// Loads prompt defaults from a TOML file.
    ///
    /// # Errors
    /// Returns `SetupError::IoError` if the file cannot be read, or
    /// `SetupError::TomlParseError` if it is not valid TOML for this shape.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SetupError::io_at(e, path))?;
        let defaults: Self =
            toml::from_str(&content).map_err(|e| SetupError::toml_parse(e, Some(path)))?;

        debug!(path = %path.display(), ?defaults, "Loaded prompt defaults");
        Ok(defaults)
    }
}
