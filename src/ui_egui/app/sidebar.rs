//! Predefined range shortcuts panel.

use super::PickerApp;
use egui::{RichText, SelectableLabel};

const PANEL_DEFAULT_WIDTH: f32 = 180.0;

impl PickerApp {
    pub(super) fn render_predefined_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("predefined_ranges")
            .default_width(PANEL_DEFAULT_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("Predefined Ranges").strong().size(18.0));
                ui.add_space(8.0);

                if self.picker.predefined_ranges().is_empty() {
                    ui.label(RichText::new("None configured").weak());
                    return;
                }

                let mut clicked = None;
                for (index, range) in self.picker.predefined_ranges().iter().enumerate() {
                    let active = self.picker.is_predefined_active(range);
                    let response = ui
                        .add(SelectableLabel::new(active, range.label.as_str()))
                        .on_hover_text(format!("{} - {}", range.start_date, range.end_date));
                    if response.clicked() {
                        clicked = Some(index);
                    }
                    ui.add_space(4.0);
                }

                if let Some(index) = clicked {
                    self.picker.select_predefined_at(index);
                }
            });
    }
}
