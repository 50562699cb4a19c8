use serde::{Serialize, Serializer};

use crate::model::metrics::MetricRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricFamily {
    DollarAmount,
    Percentage,
    MonthDuration,
}

impl MetricFamily {
    pub fn all() -> &'static [MetricFamily] {
        &[
            MetricFamily::DollarAmount,
            MetricFamily::Percentage,
            MetricFamily::MonthDuration,
        ]
    }

    pub fn key_prefix(self) -> &'static str {
        match self {
            MetricFamily::DollarAmount => "dollar_amount",
            MetricFamily::Percentage => "percentage",
            MetricFamily::MonthDuration => "month_duration",
        }
    }

    /// Label used in findings and table rows.
    pub fn display_name(self) -> &'static str {
        match self {
            MetricFamily::DollarAmount => "Dollar amount",
            MetricFamily::Percentage => "Percentage",
            MetricFamily::MonthDuration => "Time period",
        }
    }

    pub fn values(self, record: &MetricRecord) -> &[f64] {
        match self {
            MetricFamily::DollarAmount => &record.dollar_amounts,
            MetricFamily::Percentage => &record.percentages,
            MetricFamily::MonthDuration => &record.month_durations,
        }
    }
}

/// A positional comparison point. `Numeric` indices are 0-based internally and
/// rendered 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKey {
    Numeric { family: MetricFamily, index: usize },
    Recommendation,
}

impl SlotKey {
    pub fn numeric(family: MetricFamily, index: usize) -> Self {
        SlotKey::Numeric { family, index }
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotKey::Numeric { family, index } => {
                write!(f, "{}#{}", family.key_prefix(), index + 1)
            }
            SlotKey::Recommendation => f.write_str("recommendation"),
        }
    }
}

impl Serialize for SlotKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
