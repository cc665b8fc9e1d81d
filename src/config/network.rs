use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// WiFi credentials the device joins on boot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WifiConfig {
    /// Network name. Always non-empty when written by this tool.
    pub ssid: String,

    /// Network passphrase. Always non-empty when written by this tool.
    pub password: String,
}

/// Where the device downloads its JPEG image from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ServerConfig {
    /// Full URL of the image.
    pub url: String,
}
