//! Colors used by the picker window.

use egui::Color32;

#[derive(Debug, Clone)]
pub struct PickerTheme {
    /// Accent for endpoints, active shortcuts and headings
    pub accent: Color32,
    /// Fill for days strictly inside the selected range
    pub range_fill: Color32,
    /// Text on accent or range fills
    pub text_on_accent: Color32,
    pub day_background: Color32,
    pub text_primary: Color32,
    /// Weekend day numbers (not clickable)
    pub text_disabled: Color32,
    pub panel_background: Color32,
}

impl PickerTheme {
    pub fn light() -> Self {
        Self {
            accent: Color32::from_rgb(255, 86, 52),
            range_fill: Color32::from_rgb(255, 187, 174),
            text_on_accent: Color32::WHITE,
            day_background: Color32::WHITE,
            text_primary: Color32::BLACK,
            text_disabled: Color32::from_rgba_unmultiplied(0, 0, 0, 77),
            panel_background: Color32::from_rgb(245, 245, 245),
        }
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = self.panel_background;
        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke.color = self.text_on_accent;
        ctx.set_visuals(visuals);
    }
}

impl Default for PickerTheme {
    fn default() -> Self {
        Self::light()
    }
}
