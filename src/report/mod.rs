pub mod format;
pub mod json;
pub mod text;

use crate::model::{KeyVariance, RunResult, ScoreReport};
use crate::pipeline::stage3_table::ComparisonTable;

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub tool_name: String,
    pub tool_version: String,
    pub scenario: Option<String>,
    pub runs: &'a [RunResult],
    pub score: &'a ScoreReport,
    pub table: &'a ComparisonTable,
    /// Curated headline; falls back to the derived one on `score`.
    pub headline: Option<&'a KeyVariance>,
}

impl<'a> ReportContext<'a> {
    pub fn effective_headline(&self) -> Option<&'a KeyVariance> {
        self.headline.or(self.score.key_variance.as_ref())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
