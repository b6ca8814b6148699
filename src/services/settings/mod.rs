// Settings service module
// Loads and saves the picker's TOML settings file

mod service;

pub use service::{default_settings_path, SettingsService};
