use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Result, SetupError};

/// Milliseconds in one hour.
pub const MS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 1200;

/// Share of the panel width given to the sidebar, in percent.
pub const SIDEBAR_WIDTH_PCT: u32 = 20;

/// GPIO the wake button is wired to.
pub const WAKE_BUTTON_PIN: u32 = 36;

/// Refresh schedule for the displayed image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UpdateConfig {
    /// Interval between image refreshes, in milliseconds.
    #[serde(rename = "refreshMs")]
    pub refresh_ms: i64,
}

impl UpdateConfig {
    /// Derives the refresh interval from an hour count typed by the operator.
    ///
    /// Surrounding whitespace is ignored. Any integer is accepted,
    /// including zero and negative counts; `check` flags those.
    ///
    /// # Errors
    /// Returns `SetupError::InvalidRefreshHours` if the text is not an
    /// integer, or `SetupError::RefreshOverflow` if the interval does not
    /// fit in an `i64` millisecond count.
    pub fn from_hours(hours: &str) -> Result<Self> {
        let trimmed = hours.trim();
        let parsed: i64 = trimmed
            .parse()
            .map_err(|e: std::num::ParseIntError| SetupError::InvalidRefreshHours {
                value: trimmed.to_string(),
                details: e.to_string(),
            })?;

        let refresh_ms = parsed
            .checked_mul(MS_PER_HOUR)
            .ok_or(SetupError::RefreshOverflow { hours: parsed })?;

        Ok(Self { refresh_ms })
    }
}

/// Panel geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScreenConfig {
    /// Panel width in pixels.
    pub width: u32,

    /// Sidebar width as a percentage of the panel width.
    #[serde(rename = "sidebarWidthPct")]
    pub sidebar_width_pct: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            sidebar_width_pct: SIDEBAR_WIDTH_PCT,
        }
    }
}

/// Board wiring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HardwareConfig {
    /// GPIO number of the wake button.
    #[serde(rename = "wakeButtonPin")]
    pub wake_button_pin: u32,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            wake_button_pin: WAKE_BUTTON_PIN,
        }
    }
}
