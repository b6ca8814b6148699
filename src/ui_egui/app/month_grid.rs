//! Seven-column month grid with range highlighting.

use super::PickerApp;
use crate::services::selection::RangePicker;
use crate::utils::date::is_weekend;
use chrono::NaiveDate;
use egui::{Button, RichText, Vec2};

const DAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const CELL_SIZE: Vec2 = Vec2::new(44.0, 36.0);

/// How a single day cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Weekend days are shown disabled
    pub is_weekend: bool,
    pub in_range: bool,
    pub is_endpoint: bool,
}

pub fn classify_day(picker: &RangePicker, date: NaiveDate) -> DayCell {
    DayCell {
        is_weekend: is_weekend(date),
        in_range: picker.is_in_range(date),
        is_endpoint: picker.is_endpoint(date),
    }
}

impl PickerApp {
    pub(super) fn render_month_grid(&mut self, ui: &mut egui::Ui) {
        let cursor = *self.picker.cursor();
        let leading_blanks = cursor.leading_blank_days();
        let mut clicked = None;

        egui::Grid::new("month_grid")
            .num_columns(7)
            .spacing([4.0, 4.0])
            .min_col_width(CELL_SIZE.x)
            .show(ui, |ui| {
                for name in DAY_HEADERS {
                    ui.label(RichText::new(name).strong().size(18.0));
                }
                ui.end_row();

                for _ in 0..leading_blanks {
                    ui.label("");
                }

                let mut column = leading_blanks;
                for date in cursor.days() {
                    let cell = classify_day(&self.picker, date);
                    if self.render_day_cell(ui, date, cell) {
                        clicked = Some(date);
                    }

                    column += 1;
                    if column % 7 == 0 {
                        ui.end_row();
                    }
                }
            });

        if let Some(date) = clicked {
            self.picker.select_day(date);
        }
    }

    /// Draw one day; returns true when it was clicked.
    fn render_day_cell(&self, ui: &mut egui::Ui, date: NaiveDate, cell: DayCell) -> bool {
        let label = date.format("%-d").to_string();
        let (text_color, fill) = if cell.is_endpoint {
            (self.theme.text_on_accent, self.theme.accent)
        } else if cell.in_range {
            (self.theme.text_on_accent, self.theme.range_fill)
        } else if cell.is_weekend {
            (self.theme.text_disabled, self.theme.day_background)
        } else {
            (self.theme.text_primary, self.theme.day_background)
        };

        let button = Button::new(RichText::new(label).size(18.0).color(text_color))
            .fill(fill)
            .min_size(CELL_SIZE);

        ui.add_enabled(!cell.is_weekend, button).clicked()
    }
}
