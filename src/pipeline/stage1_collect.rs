use crate::extract::extract;
use crate::model::RunResult;

/// One raw response with an optional explicit run number.
#[derive(Debug, Clone)]
pub struct RawRun {
    pub run_number: Option<usize>,
    pub text: String,
}

impl RawRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            run_number: None,
            text: text.into(),
        }
    }
}

/// Extracts every response once, keeping input order. Runs without an explicit
/// number get their 1-based position.
pub fn run_stage1(raw: &[RawRun]) -> Vec<RunResult> {
    let runs = raw
        .iter()
        .enumerate()
        .map(|(pos, r)| {
            let metrics = extract(&r.text);
            let index = r.run_number.unwrap_or(pos + 1);
            tracing::debug!(
                run = index,
                dollars = metrics.dollar_amounts.len(),
                percentages = metrics.percentages.len(),
                months = metrics.month_durations.len(),
                recommendation = %metrics.recommendation,
                "extracted metrics"
            );
            if !metrics.has_numeric_metrics() {
                tracing::warn!(run = index, "no numeric metrics found in response");
            }
            RunResult {
                index,
                text: r.text.clone(),
                metrics,
            }
        })
        .collect::<Vec<_>>();
    tracing::info!(runs = runs.len(), "collected runs");
    runs
}

pub fn collect_texts<S: AsRef<str>>(texts: &[S]) -> Vec<RunResult> {
    let raw = texts
        .iter()
        .map(|t| RawRun::new(t.as_ref()))
        .collect::<Vec<_>>();
    run_stage1(&raw)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_collect.rs"]
mod tests;
