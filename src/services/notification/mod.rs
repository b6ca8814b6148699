//! Outbound notification to the host application.
//!
//! The host is told about every change that affects whether a complete range
//! is selected: either the formatted bounds plus the weekend dates inside
//! them, or an explicit "no selection" with no weekends.

use serde::{Deserialize, Serialize};

/// Payload handed to the host.
///
/// Serializes as `{"range":["YYYY-MM-DD","YYYY-MM-DD"],"weekends":[...]}` or
/// `{"range":null,"weekends":[]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeChange {
    pub range: Option<[String; 2]>,
    pub weekends: Vec<String>,
}

impl RangeChange {
    pub fn selected(range: [String; 2], weekends: Vec<String>) -> Self {
        Self {
            range: Some(range),
            weekends,
        }
    }

    pub fn cleared() -> Self {
        Self {
            range: None,
            weekends: Vec::new(),
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.range.is_none()
    }
}

/// Receives range changes synchronously, in the order they happen.
#[cfg_attr(test, mockall::automock)]
pub trait RangeChangeListener {
    fn on_change(&mut self, change: &RangeChange);
}

impl<F> RangeChangeListener for F
where
    F: FnMut(&RangeChange),
{
    fn on_change(&mut self, change: &RangeChange) {
        self(change)
    }
}

/// Writes every change to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingListener;

impl RangeChangeListener for LoggingListener {
    fn on_change(&mut self, change: &RangeChange) {
        match &change.range {
            Some([start, end]) => {
                log::info!("Selected date range: [{}, {}]", start, end);
                log::info!("Weekend dates within range: {:?}", change.weekends);
            }
            None => log::info!("No date range selected"),
        }
    }
}
