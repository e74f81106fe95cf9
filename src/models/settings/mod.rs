//! Persisted layout configuration.
//!
//! Settings are stored as TOML in the per-user config directory. Every field
//! has a default, so a partial file (or no file at all) still yields usable
//! geometry.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Weekday;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::weekday_from_index;

const SETTINGS_FILE_NAME: &str = "layout.toml";

/// Validation failures for [`LayoutSettings`].
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("lane height must be positive, got {0}")]
    InvalidLaneHeight(f32),
    #[error("lane spacing cannot be negative, got {0}")]
    InvalidLaneSpacing(f32),
    #[error("{field} cannot be negative, got {value}")]
    NegativeReserve { field: &'static str, value: f32 },
    #[error("hard lane cap must be at least 1")]
    ZeroLaneCap,
    #[error("first day of week must be 0-6, got {0}")]
    InvalidFirstDay(u8),
    #[error("month rows need between 28 and 42 columns, got {0}")]
    InvalidMonthRowColumns(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Height of one event bar in pixels.
    pub lane_height: f32,
    /// Vertical gap between two lanes in pixels.
    pub lane_spacing: f32,
    /// Space taken by the date label at the top of each column.
    pub header_reserve: f32,
    /// Height of the "+N more" row.
    pub overflow_indicator_height: f32,
    /// Upper bound on visible lanes regardless of available height.
    pub hard_lane_cap: usize,
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    /// Fixed column count of a month row in the year layout.
    pub month_row_columns: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            lane_height: 18.0,
            lane_spacing: 2.0,
            header_reserve: 22.0,
            overflow_indicator_height: 16.0,
            hard_lane_cap: 8,
            first_day_of_week: 0, // Sunday
            month_row_columns: 37,
        }
    }
}

impl LayoutSettings {
    /// Distance between the tops of two consecutive lanes.
    pub fn lane_pitch(&self) -> f32 {
        self.lane_height + self.lane_spacing
    }

    pub fn first_weekday(&self) -> Weekday {
        weekday_from_index(self.first_day_of_week)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.lane_height > 0.0) {
            return Err(SettingsError::InvalidLaneHeight(self.lane_height));
        }
        if self.lane_spacing < 0.0 {
            return Err(SettingsError::InvalidLaneSpacing(self.lane_spacing));
        }
        if self.header_reserve < 0.0 {
            return Err(SettingsError::NegativeReserve {
                field: "header_reserve",
                value: self.header_reserve,
            });
        }
        if self.overflow_indicator_height < 0.0 {
            return Err(SettingsError::NegativeReserve {
                field: "overflow_indicator_height",
                value: self.overflow_indicator_height,
            });
        }
        if self.hard_lane_cap == 0 {
            return Err(SettingsError::ZeroLaneCap);
        }
        if self.first_day_of_week > 6 {
            return Err(SettingsError::InvalidFirstDay(self.first_day_of_week));
        }
        if !(28..=42).contains(&self.month_row_columns) {
            return Err(SettingsError::InvalidMonthRowColumns(self.month_row_columns));
        }
        Ok(())
    }

    /// Location of the settings file in the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "KenBoyle", "RustCalendar")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text).context("Failed to parse layout settings")?;
        settings.validate().context("Invalid layout settings")?;
        Ok(settings)
    }

    /// Read settings from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout settings from {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// Read settings from `path`, falling back to defaults when the file is
    /// missing or unusable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No layout settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Failed to load layout settings: {:#}", err);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate().context("Refusing to save invalid layout settings")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }
        let text = toml::to_string_pretty(self).context("Failed to serialise layout settings")?;
        std::fs::write(path, text).context("Failed to write layout settings file")?;
        log::info!("Saved layout settings to {}", path.display());
        Ok(())
    }
}
