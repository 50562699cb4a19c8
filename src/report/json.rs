use serde::Serialize;

use crate::model::{KeyVariance, MetricRecord, ScoreReport, SlotScore, StatusTier};
use crate::pipeline::stage3_table::ComparisonTable;
use crate::report::ReportContext;

#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub tool: &'a str,
    pub version: &'a str,
    pub scenario: Option<&'a str>,
    pub n_runs: usize,
    pub total_score: u32,
    pub earned_points: u32,
    pub max_possible_points: u32,
    pub status: StatusTier,
    pub slots: &'a [SlotScore],
    pub findings: &'a [String],
    pub improvement_suggestions: &'a [String],
    pub headline: Option<&'a KeyVariance>,
    pub runs: Vec<RunSummary<'a>>,
    pub comparison: &'a ComparisonTable,
}

#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub run_number: usize,
    pub metrics: &'a MetricRecord,
}

pub fn build_summary<'a>(ctx: &'a ReportContext<'a>) -> Summary<'a> {
    let score: &ScoreReport = ctx.score;
    Summary {
        tool: &ctx.tool_name,
        version: &ctx.tool_version,
        scenario: ctx.scenario.as_deref(),
        n_runs: ctx.runs.len(),
        total_score: score.total_score,
        earned_points: score.earned_points,
        max_possible_points: score.max_possible_points,
        status: score.status_tier,
        slots: &score.slots,
        findings: &score.findings,
        improvement_suggestions: &score.improvement_suggestions,
        headline: ctx.effective_headline(),
        runs: ctx
            .runs
            .iter()
            .map(|r| RunSummary {
                run_number: r.index,
                metrics: &r.metrics,
            })
            .collect(),
        comparison: ctx.table,
    }
}

pub fn render_summary_json(ctx: &ReportContext<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build_summary(ctx))
}
