use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Proceed,
    ProceedWithCaution,
    DoNotProceed,
    #[default]
    Unclear,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Proceed => "PROCEED",
            Recommendation::ProceedWithCaution => "PROCEED_WITH_CAUTION",
            Recommendation::DoNotProceed => "DO_NOT_PROCEED",
            Recommendation::Unclear => "UNCLEAR",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured signals pulled out of one response.
///
/// Every sequence keeps the order of first appearance in the text; slot
/// comparison downstream is positional, so the order is part of the contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricRecord {
    pub dollar_amounts: Vec<f64>,
    pub percentages: Vec<f64>,
    pub month_durations: Vec<f64>,
    pub recommendation: Recommendation,
    pub recommendation_evidence: String,
}

impl MetricRecord {
    pub fn has_numeric_metrics(&self) -> bool {
        !(self.dollar_amounts.is_empty()
            && self.percentages.is_empty()
            && self.month_durations.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// 1-based.
    pub index: usize,
    pub text: String,
    pub metrics: MetricRecord,
}
