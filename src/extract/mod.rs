pub mod patterns;
pub mod recommendation;

use serde::Serialize;

use crate::model::{MetricRecord, Recommendation};

/// Extracts the structured metric record from one free-text response.
///
/// Never fails: text without recognizable signals yields empty sequences and
/// [`Recommendation::Unclear`].
pub fn extract(text: &str) -> MetricRecord {
    let evidence = recommendation::evidence_window(text);
    MetricRecord {
        dollar_amounts: patterns::dollar_amounts(text),
        percentages: patterns::percentages(text),
        month_durations: patterns::month_durations(text),
        recommendation: recommendation::classify(evidence),
        recommendation_evidence: evidence.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Tag(Recommendation),
}

/// Resolves a human metric name ("Annual Savings", "ROI", "Payback Period")
/// to the first value of the matching family.
pub fn lookup_metric(record: &MetricRecord, name: &str) -> Option<MetricValue> {
    let name = name.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| name.contains(w));
    if has(&["cost", "savings"]) {
        record.dollar_amounts.first().copied().map(MetricValue::Number)
    } else if has(&["percentage", "roi"]) {
        record.percentages.first().copied().map(MetricValue::Number)
    } else if has(&["payback", "period"]) {
        record.month_durations.first().copied().map(MetricValue::Number)
    } else if has(&["recommendation"]) {
        Some(MetricValue::Tag(record.recommendation))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/extract/tests.rs"]
mod tests;
