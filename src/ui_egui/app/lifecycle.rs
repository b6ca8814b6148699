use super::PickerApp;
use crate::models::predefined_range::resolve_all;
use crate::models::settings::Settings;
use crate::services::notification::{LoggingListener, RangeChangeListener};
use crate::services::selection::RangePicker;
use crate::ui_egui::theme::PickerTheme;
use chrono::{Local, NaiveDate};

impl PickerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        let today = Local::now().date_naive();
        let app = Self::from_settings(settings, today, Box::new(LoggingListener));
        app.theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Build the app without a window, resolving shortcuts against `today`.
    pub fn from_settings(
        settings: &Settings,
        today: NaiveDate,
        listener: Box<dyn RangeChangeListener>,
    ) -> Self {
        let predefined_ranges = resolve_all(&settings.predefined_ranges, today);
        log::info!(
            "Starting picker on {} with {} predefined ranges",
            today,
            predefined_ranges.len()
        );

        Self {
            picker: RangePicker::new(today, settings.year_window, predefined_ranges, listener),
            theme: PickerTheme::light(),
        }
    }
}
