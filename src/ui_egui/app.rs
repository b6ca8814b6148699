mod lifecycle;
mod month_grid;
mod navigation;
mod result_panel;
mod sidebar;

pub use self::month_grid::{classify_day, DayCell};

use crate::services::selection::RangePicker;
use crate::ui_egui::theme::PickerTheme;

/// Desktop host for a single `RangePicker`.
pub struct PickerApp {
    picker: RangePicker,
    theme: PickerTheme,
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panels first so the central panel gets the remaining space
        self.render_predefined_panel(ctx);
        self.render_result_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(
                    egui::RichText::new("📅 DateRange Picker")
                        .color(self.theme.accent)
                        .strong(),
                );
            });
            ui.add_space(12.0);
            self.render_navigation(ui);
            ui.separator();
            self.render_month_grid(ui);
        });
    }
}

impl PickerApp {
    pub fn picker(&self) -> &RangePicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut RangePicker {
        &mut self.picker
    }
}
