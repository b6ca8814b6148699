//! Predefined range shortcuts ("Last 7 days", "This month", ...).
//!
//! A `PredefinedRange` carries concrete dates and is what the picker
//! consumes. Settings store shortcuts as `PredefinedRangeConfig`, which is
//! relative to "today" and resolved when the picker starts.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::date::{first_of_month, last_of_month};

/// A host-supplied shortcut with fixed bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedRange {
    /// Identifier used to mark the shortcut as active
    pub id: Option<i64>,
    /// Button label
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl PredefinedRange {
    pub fn new(
        id: Option<i64>,
        label: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            start_date,
            end_date,
        }
    }

    /// Whether the bounds are in chronological order.
    ///
    /// The picker never rejects or reorders out-of-order bounds; this is
    /// only used to warn about them.
    pub fn is_ordered(&self) -> bool {
        self.start_date <= self.end_date
    }
}

/// How a shortcut's bounds are derived from today's date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeRule {
    /// `days` days ago through today
    LastDays { days: u32 },
    /// First through last day of the current month
    ThisMonth,
    /// Fixed bounds
    Fixed { start: NaiveDate, end: NaiveDate },
}

/// A shortcut as stored in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedRangeConfig {
    #[serde(default)]
    pub id: Option<i64>,
    pub label: String,
    #[serde(flatten)]
    pub rule: RangeRule,
}

impl PredefinedRangeConfig {
    pub fn new(id: Option<i64>, label: impl Into<String>, rule: RangeRule) -> Self {
        Self {
            id,
            label: label.into(),
            rule,
        }
    }

    /// Resolve the rule against `today` (a local calendar date).
    ///
    /// A look-back reaching past the earliest representable date starts there.
    pub fn resolve(&self, today: NaiveDate) -> PredefinedRange {
        let (start, end) = match &self.rule {
            RangeRule::LastDays { days } => {
                let start = today
                    .checked_sub_signed(Duration::days(i64::from(*days)))
                    .unwrap_or(NaiveDate::MIN);
                (start, today)
            }
            RangeRule::ThisMonth => (first_of_month(today), last_of_month(today)),
            RangeRule::Fixed { start, end } => (*start, *end),
        };
        PredefinedRange::new(self.id, self.label.clone(), start, end)
    }
}

/// Shortcuts offered when the settings file does not list any.
pub fn default_predefined_ranges() -> Vec<PredefinedRangeConfig> {
    vec![
        PredefinedRangeConfig::new(Some(121), "Last 7 days", RangeRule::LastDays { days: 7 }),
        PredefinedRangeConfig::new(Some(131), "Last 30 days", RangeRule::LastDays { days: 30 }),
        PredefinedRangeConfig::new(Some(141), "This month", RangeRule::ThisMonth),
    ]
}

/// Resolve a list of configured shortcuts against `today`, keeping order.
pub fn resolve_all(configs: &[PredefinedRangeConfig], today: NaiveDate) -> Vec<PredefinedRange> {
    configs
        .iter()
        .map(|config| {
            let range = config.resolve(today);
            if !range.is_ordered() {
                log::warn!(
                    "Predefined range '{}' ends before it starts ({} > {})",
                    range.label,
                    range.start_date,
                    range.end_date
                );
            }
            range
        })
        .collect()
}
