// Settings module
// Persisted configuration for the picker window

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::calendar_cursor::DEFAULT_YEAR_WINDOW;
use crate::models::predefined_range::{
    default_predefined_ranges, PredefinedRangeConfig, RangeRule,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Years offered either side of the current year in the year dropdown
    pub year_window: u32,
    pub window_width: f32,
    pub window_height: f32,
    pub predefined_ranges: Vec<PredefinedRangeConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            year_window: DEFAULT_YEAR_WINDOW,
            window_width: 1100.0,
            window_height: 640.0,
            predefined_ranges: default_predefined_ranges(),
        }
    }
}

/// Longest look-back a `last_days` shortcut may use.
pub const MAX_LAST_DAYS: u32 = 36_600;

/// Values the picker cannot work with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Year window cannot exceed 200 years (got {0})")]
    YearWindowTooLarge(u32),
    #[error("Window must be at least 200x200 (got {width}x{height})")]
    WindowTooSmall { width: f32, height: f32 },
    #[error("Predefined range {0:?} has an empty label")]
    EmptyLabel(Option<i64>),
    #[error("Predefined range '{label}' looks back {days} days, the limit is 36600")]
    LookBackTooLong { label: String, days: u32 },
}

const MAX_YEAR_WINDOW: u32 = 200;
const MIN_WINDOW_SIZE: f32 = 200.0;

impl Settings {
    /// Check values the picker cannot work with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.year_window > MAX_YEAR_WINDOW {
            return Err(SettingsError::YearWindowTooLarge(self.year_window));
        }

        if !(self.window_width >= MIN_WINDOW_SIZE && self.window_height >= MIN_WINDOW_SIZE) {
            return Err(SettingsError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
            });
        }

        for range in &self.predefined_ranges {
            if range.label.trim().is_empty() {
                return Err(SettingsError::EmptyLabel(range.id));
            }
            if let RangeRule::LastDays { days } = range.rule {
                if days > MAX_LAST_DAYS {
                    return Err(SettingsError::LookBackTooLong {
                        label: range.label.clone(),
                        days,
                    });
                }
            }
        }

        Ok(())
    }
}
