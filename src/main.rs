// Date Range Picker Application
// Main entry point

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use date_range_picker::models::settings::Settings;
use date_range_picker::services::settings::{default_settings_path, SettingsService};
use date_range_picker::ui_egui::PickerApp;

#[derive(Parser)]
#[command(
    name = "date-range-picker",
    about = "Pick a date range and list the weekends inside it"
)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the default settings to the settings file and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let settings_path = cli
        .config
        .or_else(default_settings_path)
        .ok_or_else(|| anyhow!("Could not determine a settings location, pass --config"))?;
    let settings_service = SettingsService::new(settings_path);

    if cli.write_default_config {
        settings_service.save(&Settings::default())?;
        log::info!("Wrote default settings to {}", settings_service.path().display());
        return Ok(());
    }

    let settings = settings_service.load()?;

    log::info!("Starting Date Range Picker");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Date Range Picker",
        options,
        Box::new(move |cc| Ok(Box::new(PickerApp::new(cc, &settings)))),
    )
    .map_err(|e| anyhow!("Failed to run picker window: {}", e))
}
