mod app;
pub mod theme;

pub use app::{classify_day, DayCell, PickerApp};
