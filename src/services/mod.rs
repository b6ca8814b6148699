// Service module exports

pub mod notification;
pub mod selection;
pub mod settings;
pub mod weekend;
