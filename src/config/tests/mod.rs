//! Unit tests for config module
//!
//! Tests configuration types, defaults, derivation and validation.
//! Filesystem access only through temporary directories.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::SetupError;
use crate::config::{
    ConfigPaths, DisplayConfig, HardwareConfig, PromptDefaults, ScreenConfig, ServerConfig,
    Severity, UpdateConfig, WeatherConfig, WifiConfig,
};

fn sample_config() -> DisplayConfig {
    DisplayConfig {
        wifi: WifiConfig {
            ssid: "HomeNet".to_string(),
            password: "secret123".to_string(),
        },
        server: ServerConfig {
            url: "http://httpbin.org/image/jpeg".to_string(),
        },
        weather: WeatherConfig {
            latitude: "47.6062".to_string(),
            longitude: "-122.3321".to_string(),
            city: "Seattle".to_string(),
            units: "fahrenheit".to_string(),
        },
        update: UpdateConfig {
            refresh_ms: 86_400_000,
        },
        display: ScreenConfig::default(),
        hardware: HardwareConfig::default(),
    }
}

#[test]
fn refresh_ms_is_hours_times_3600000() {
    assert_eq!(UpdateConfig::from_hours("24").unwrap().refresh_ms, 86_400_000);
    assert_eq!(UpdateConfig::from_hours("1").unwrap().refresh_ms, 3_600_000);
    assert_eq!(UpdateConfig::from_hours("0").unwrap().refresh_ms, 0);
    assert_eq!(UpdateConfig::from_hours(" 6 ").unwrap().refresh_ms, 21_600_000);
}

#[test]
fn negative_refresh_hours_are_integers() {
    assert_eq!(UpdateConfig::from_hours("-1").unwrap().refresh_ms, -3_600_000);
    assert_eq!(UpdateConfig::from_hours("-3").unwrap().refresh_ms, -10_800_000);
    assert_eq!(UpdateConfig::from_hours("+2").unwrap().refresh_ms, 7_200_000);
}

#[test]
fn non_positive_refresh_only_warns() {
    let mut config = sample_config();
    config.update = UpdateConfig::from_hours("-1").unwrap();

    let issues = config.issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "update.refreshMs");
    assert_eq!(issues[0].severity, Severity::Warning);
    assert!(config.is_configured());

    let json = config.to_json_pretty().unwrap();
    assert!(json.contains("\"refreshMs\": -3600000"));
}

#[test]
fn refresh_hours_rejects_non_integers() {
    for bad in ["abc", "", "1.5", "- 3", "24h", "--1"] {
        match UpdateConfig::from_hours(bad) {
            Err(SetupError::InvalidRefreshHours { value, .. }) => assert_eq!(value, bad.trim()),
            other => panic!("expected InvalidRefreshHours for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn refresh_hours_overflow_is_reported() {
    let result = UpdateConfig::from_hours(&i64::MAX.to_string());
    assert!(matches!(result, Err(SetupError::RefreshOverflow { .. })));
}

#[test]
fn fixed_constants() {
    let screen = ScreenConfig::default();
    assert_eq!(screen.width, 1200);
    assert_eq!(screen.sidebar_width_pct, 20);
    assert_eq!(HardwareConfig::default().wake_button_pin, 36);
}

#[test]
fn serialized_shape_matches_firmware_contract() {
    let json = sample_config().to_json_pretty().unwrap();

    let expected = r#"{
  "wifi": {
    "ssid": "HomeNet",
    "password": "secret123"
  },
  "server": {
    "url": "http://httpbin.org/image/jpeg"
  },
  "weather": {
    "latitude": "47.6062",
    "longitude": "-122.3321",
    "city": "Seattle",
    "units": "fahrenheit"
  },
  "update": {
    "refreshMs": 86400000
  },
  "display": {
    "width": 1200,
    "sidebarWidthPct": 20
  },
  "hardware": {
    "wakeButtonPin": 36
  }
}"#;

    assert_eq!(json, expected);
}

#[test]
fn non_ascii_text_is_written_as_utf8() {
    let mut config = sample_config();
    config.wifi.ssid = "Café".to_string();
    config.weather.city = "Zürich".to_string();

    let json = config.to_json_pretty().unwrap();

    assert!(json.contains("\"ssid\": \"Café\""));
    assert!(json.contains("\"city\": \"Zürich\""));
    assert!(!json.contains("\\u00e9"));
}

#[test]
fn load_reads_back_written_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");
    fs::write(&path, sample_config().to_json_pretty().unwrap()).unwrap();

    let loaded = DisplayConfig::load(&path).unwrap();
    assert_eq!(loaded, sample_config());
}

#[test]
fn load_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let result = DisplayConfig::load(&temp.path().join("absent.json"));
    assert!(matches!(result, Err(SetupError::IoError { .. })));
}

#[test]
fn load_rejects_wrong_key_case() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");
    let json = sample_config()
        .to_json_pretty()
        .unwrap()
        .replace("refreshMs", "refresh_ms");
    fs::write(&path, json).unwrap();

    let result = DisplayConfig::load(&path);
    assert!(matches!(result, Err(SetupError::JsonParseError { .. })));
}

#[test]
fn prompt_defaults_builtin_values() {
    let defaults = PromptDefaults::default();
    assert_eq!(defaults.server_url, "http://httpbin.org/image/jpeg");
    assert_eq!(defaults.city, "Seattle");
    assert_eq!(defaults.latitude, "47.6062");
    assert_eq!(defaults.longitude, "-122.3321");
    assert_eq!(defaults.units, "fahrenheit");
    assert_eq!(defaults.refresh_hours, "24");
}

#[test]
fn prompt_defaults_partial_toml_keeps_builtins() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("defaults.toml");
    fs::write(&path, "city = \"Portland\"\nunits = \"celsius\"\n").unwrap();

    let defaults = PromptDefaults::load(&path).unwrap();
    assert_eq!(defaults.city, "Portland");
    assert_eq!(defaults.units, "celsius");
    assert_eq!(defaults.refresh_hours, "24");
    assert_eq!(defaults.latitude, "47.6062");
}

#[test]
fn prompt_defaults_invalid_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("defaults.toml");
    fs::write(&path, "city = [").unwrap();

    let result = PromptDefaults::load(&path);
    assert!(matches!(result, Err(SetupError::TomlParseError { .. })));
}

#[test]
fn default_output_path() {
    let path = ConfigPaths::default_output();
    assert!(path.ends_with("data/config.json"));
    assert_eq!(path.parent().unwrap(), std::path::Path::new("data"));
}

#[test]
fn complete_config_has_no_issues() {
    let config = sample_config();
    assert!(config.issues().is_empty());
    assert!(config.is_configured());
}

#[test]
fn placeholder_ssid_blocks() {
    let mut config = sample_config();
    config.wifi.ssid = "YOUR_WIFI_SSID".to_string();

    let issues = config.issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Blocking);
    assert_eq!(issues[0].field, "wifi.ssid");
    assert!(!config.is_configured());
}

#[test]
fn blocking_issues_follow_firmware_order() {
    let mut config = sample_config();
    config.wifi.password = String::new();
    config.server.url = "http://example.com/image.jpg".to_string();
    config.wifi.ssid = "DEFAULT_SSID".to_string();

    let fields: Vec<_> = config.issues().iter().map(|i| i.field).collect();
    assert_eq!(fields, ["wifi.ssid", "wifi.password", "server.url"]);
}

#[test]
fn odd_weather_values_only_warn() {
    let mut config = sample_config();
    config.weather.units = "kelvin".to_string();
    config.weather.latitude = "north".to_string();
    config.weather.longitude = "-190".to_string();

    let issues = config.issues();
    assert_eq!(issues.len(), 3);
    assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    assert!(config.is_configured());
}
