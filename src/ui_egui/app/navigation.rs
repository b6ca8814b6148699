//! Month header: previous/next arrows and the month/year dropdowns.

use super::PickerApp;
use crate::models::calendar_cursor::month_name;

impl PickerApp {
    pub(super) fn render_navigation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous month").clicked() {
                self.picker.change_month(-1);
            }

            self.render_month_select(ui);
            self.render_year_select(ui);

            if ui.button("▶").on_hover_text("Next month").clicked() {
                self.picker.change_month(1);
            }
        });
    }

    fn render_month_select(&mut self, ui: &mut egui::Ui) {
        let current = self.picker.cursor().month();
        let mut selected = current;

        egui::ComboBox::from_id_source("month_select")
            .selected_text(month_name(current))
            .show_ui(ui, |ui| {
                for month in 0..12 {
                    ui.selectable_value(&mut selected, month, month_name(month));
                }
            });

        if selected != current {
            if let Err(e) = self.picker.select_month(selected) {
                log::warn!("Month selection rejected: {}", e);
            }
        }
    }

    fn render_year_select(&mut self, ui: &mut egui::Ui) {
        let current = self.picker.cursor().year();
        let mut selected = current;

        egui::ComboBox::from_id_source("year_select")
            .selected_text(current.to_string())
            .show_ui(ui, |ui| {
                for year in self.picker.year_options() {
                    ui.selectable_value(&mut selected, year, year.to_string());
                }
            });

        if selected != current {
            if let Err(e) = self.picker.select_year(selected) {
                log::warn!("Year selection rejected: {}", e);
            }
        }
    }
}
