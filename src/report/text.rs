use crate::model::{ScoreReport, SlotKey};
use crate::report::ReportContext;
use crate::report::format::format_variance;

pub fn render_report_text(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();

    out.push_str("Output Consistency Report\n");
    out.push_str("=========================\n\n");
    if let Some(name) = &ctx.scenario {
        out.push_str(&format!("Scenario: {}\n", name));
    }
    out.push_str(&format!("Runs compared: {}\n\n", ctx.runs.len()));

    out.push_str("1. Trust score\n");
    out.push_str(&format!(
        "Trust score: {}/100 ({} of {} points)\n",
        ctx.score.total_score, ctx.score.earned_points, ctx.score.max_possible_points
    ));
    out.push_str(&format!(
        "Status: {} ({})\n",
        ctx.score.status_tier.as_str(),
        ctx.score.status_tier.label()
    ));
    if let Some(kv) = ctx.effective_headline() {
        out.push_str(&format!("Headline: {}\n", kv.problem_statement));
        out.push_str(&format!("{}: {}\n", kv.metric_name, kv.values.join(" | ")));
    }
    out.push('\n');

    out.push_str("2. Side-by-side comparison\n");
    out.push_str(&ctx.table.render_aligned());
    out.push('\n');

    out.push_str("3. Slot scores\n");
    out.push_str(&slot_lines(ctx.score));
    out.push('\n');

    out.push_str("4. Findings\n");
    if ctx.score.findings.is_empty() {
        out.push_str("None\n");
    }
    for (level, finding) in ctx.score.leveled_findings() {
        out.push_str(&format!("{} {}\n", level.mark(), finding));
    }
    out.push('\n');

    out.push_str("5. Suggested improvements\n");
    if ctx.score.improvement_suggestions.is_empty() {
        out.push_str("None: outputs are consistent enough for production use.\n");
    }
    for (i, s) in ctx.score.improvement_suggestions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, s));
    }

    out
}

fn slot_lines(score: &ScoreReport) -> String {
    let width = score
        .slots
        .iter()
        .map(|s| s.key.to_string().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for slot in &score.slots {
        let variance = match slot.key {
            SlotKey::Recommendation => String::new(),
            SlotKey::Numeric { .. } => format!("  variance {}", format_variance(slot.variance_pct)),
        };
        out.push_str(&format!(
            "{:<width$}  {:>2}/{}{}\n",
            slot.key.to_string(),
            slot.score,
            score.slot_max,
            variance
        ));
    }
    out
}
