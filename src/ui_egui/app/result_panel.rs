//! "Selected Date Range" panel.

use super::PickerApp;
use egui::RichText;

const WEEKEND_LIST_MAX_HEIGHT: f32 = 340.0;

impl PickerApp {
    pub(super) fn render_result_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("selected_range")
            .default_width(220.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("Selected Date Range").strong().size(20.0));
                ui.add_space(8.0);

                let Some([start, end]) = self.picker.range().formatted() else {
                    ui.label("No date range selected");
                    return;
                };

                ui.label(RichText::new(format!("[{} - {}]", start, end)).strong());
                ui.add_space(8.0);
                ui.label(RichText::new("Weekends:").strong());

                egui::ScrollArea::vertical()
                    .max_height(WEEKEND_LIST_MAX_HEIGHT)
                    .show(ui, |ui| {
                        for date in self.picker.weekends() {
                            ui.label(date.as_str());
                        }
                    });

                ui.add_space(8.0);
                if ui.button("Clear").clicked() {
                    self.picker.clear();
                }
            });
    }
}
