//! Checks an existing configuration the way the firmware does on boot.

use std::fmt;

use super::{DisplayConfig, WeatherConfig};

const SSID_PLACEHOLDERS: [&str; 2] = ["YOUR_WIFI_SSID", "DEFAULT_SSID"];
const PASSWORD_PLACEHOLDERS: [&str; 2] = ["YOUR_WIFI_PASSWORD", "DEFAULT_PASSWORD"];
const URL_PLACEHOLDER: &str = "http://example.com/image.jpg";

/// How serious a configuration finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The firmware refuses to run with this value.
    Blocking,

    /// The firmware runs, but the value is likely wrong.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Blocking => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single finding about a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// How serious the finding is.
    pub severity: Severity,

    /// Dotted JSON path of the offending field, e.g. `wifi.ssid`.
    pub field: &'static str,

    /// Message for the operator.
    pub message: String,
}

impl ConfigIssue {
    /// The finding for a configuration file that does not exist.
    pub fn missing_file() -> Self {
        Self::blocking(
            "file",
            "Configuration file missing. Please upload config.json to device.",
        )
    }

    fn blocking(field: &'static str, message: &str) -> Self {
        Self {
            severity: Severity::Blocking,
            field,
            message: message.to_string(),
        }
    }

    fn warning(field: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.field, self.message)
    }
}

impl DisplayConfig {
    /// Lists every finding, blocking issues first in firmware check order.
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if is_unset(&self.wifi.ssid, &SSID_PLACEHOLDERS) {
            issues.push(ConfigIssue::blocking(
                "wifi.ssid",
                "WiFi SSID not configured. Please update your configuration.",
            ));
        }

        if is_unset(&self.wifi.password, &PASSWORD_PLACEHOLDERS) {
            issues.push(ConfigIssue::blocking(
                "wifi.password",
                "WiFi password not configured. Please update your configuration.",
            ));
        }

        if is_unset(&self.server.url, &[URL_PLACEHOLDER]) {
            issues.push(ConfigIssue::blocking(
                "server.url",
                "Image server URL not configured. Please update your configuration.",
            ));
        }

        if self.update.refresh_ms <= 0 {
            issues.push(ConfigIssue::warning(
                "update.refreshMs",
                format!(
                    "Refresh interval of {} ms is not positive; the device reads it as unsigned.",
                    self.update.refresh_ms
                ),
            ));
        }

        if !WeatherConfig::KNOWN_UNITS.contains(&self.weather.units.as_str()) {
            issues.push(ConfigIssue::warning(
                "weather.units",
                format!(
                    "Unknown temperature units '{}'; expected fahrenheit or celsius.",
                    self.weather.units
                ),
            ));
        }

        if !is_coordinate(&self.weather.latitude, 90.0) {
            issues.push(ConfigIssue::warning(
                "weather.latitude",
                format!(
                    "Latitude '{}' is not a number between -90 and 90.",
                    self.weather.latitude
                ),
            ));
        }

        if !is_coordinate(&self.weather.longitude, 180.0) {
            issues.push(ConfigIssue::warning(
                "weather.longitude",
                format!(
                    "Longitude '{}' is not a number between -180 and 180.",
                    self.weather.longitude
                ),
            ));
        }

        issues
    }

    /// Whether the firmware would accept this configuration.
    pub fn is_configured(&self) -> bool {
        self.issues()
            .iter()
            .all(|issue| issue.severity != Severity::Blocking)
    }
}

fn is_unset(value: &str, placeholders: &[&str]) -> bool {
    value.is_empty() || placeholders.contains(&value)
}

fn is_coordinate(text: &str, limit: f64) -> bool {
    text.trim()
        .parse::<f64>()
        .is_ok_and(|value| value.is_finite() && value.abs() <= limit)
}
