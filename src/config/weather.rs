use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Weather lookup settings.
///
/// Coordinates are kept as the text the operator typed; the firmware
/// reads them as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherConfig {
    /// Latitude in decimal degrees, as text.
    pub latitude: String,

    /// Longitude in decimal degrees, as text.
    pub longitude: String,

    /// City name shown on the display.
    pub city: String,

    /// Temperature units, "fahrenheit" or "celsius".
    pub units: String,
}

impl WeatherConfig {
    /// Units the firmware knows how to render.
    pub const KNOWN_UNITS: [&'static str; 2] = ["fahrenheit", "celsius"];
}
