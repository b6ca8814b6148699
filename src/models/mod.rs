// Module exports for models

pub mod calendar_cursor;
pub mod date_range;
pub mod predefined_range;
pub mod settings;
