use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Location of the settings file in the platform config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Ken24T", "DateRangePicker")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::warn!(
                "Settings file {} not found, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Write the settings file, creating its directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        Ok(())
    }
}
