use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::{
    FindingLevel, KeyVariance, MetricFamily, Recommendation, RunResult, ScoreReport,
    ScoringProfile, SlotKey, SlotScore,
};
use crate::report::format::format_percent;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("at least 2 runs are required to score consistency, got {got}")]
    InsufficientRuns { got: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericOutcome {
    pub score: u32,
    pub variance_pct: f64,
}

pub const SUGGEST_OUTPUT_CONTRACT: &str =
    "Add a structured output format (e.g. a fixed JSON schema) to the prompt so metrics are reported the same way every run";
pub const SUGGEST_TEMPERATURE: &str =
    "Lower the sampling temperature toward 0.0 for more deterministic outputs";
pub const SUGGEST_VALIDATION_STEPS: &str =
    "Add explicit calculation validation steps to the prompt";
pub const SUGGEST_DECOMPOSE: &str =
    "Break the analysis into smaller, focused prompts";
pub const SUGGEST_DECISION_CRITERIA: &str =
    "Provide clearer decision criteria for the final recommendation in the prompt";

pub fn score(runs: &[RunResult]) -> Result<ScoreReport, ScoreError> {
    run_stage2(runs, &ScoringProfile::default_v1())
}

pub fn run_stage2(runs: &[RunResult], profile: &ScoringProfile) -> Result<ScoreReport, ScoreError> {
    if runs.len() < 2 {
        return Err(ScoreError::InsufficientRuns { got: runs.len() });
    }

    let mut acc = Accumulator::default();

    for &family in MetricFamily::all() {
        for index in 0..profile.slot_count(family) {
            let values = slot_values(runs, family, index);
            if values.len() < profile.min_contributors {
                continue;
            }
            let outcome = score_numeric(&values, profile);
            let key = SlotKey::numeric(family, index);
            tracing::debug!(
                slot = %key,
                contributors = values.len(),
                score = outcome.score,
                variance_pct = outcome.variance_pct,
                "scored numeric slot"
            );
            acc.push_slot(
                SlotScore {
                    key,
                    score: outcome.score,
                    variance_pct: Some(outcome.variance_pct),
                    contributors: values.len(),
                },
                profile.slot_max,
            );
            if outcome.variance_pct > profile.finding_threshold(family) {
                let level = if outcome.score == 0 {
                    FindingLevel::Critical
                } else {
                    FindingLevel::Warning
                };
                acc.finding(
                    level,
                    format!(
                        "{} #{} varies by {:.1}% across runs",
                        family.display_name(),
                        index + 1,
                        outcome.variance_pct
                    ),
                );
            }
        }
    }

    let tags = runs
        .iter()
        .map(|r| r.metrics.recommendation)
        .collect::<Vec<_>>();
    let rec_score = score_recommendations(&tags, profile);
    acc.push_slot(
        SlotScore {
            key: SlotKey::Recommendation,
            score: rec_score,
            variance_pct: None,
            contributors: tags.len(),
        },
        profile.slot_max,
    );
    if rec_score == profile.slot_max {
        acc.finding(
            FindingLevel::Ok,
            "Final recommendation is consistent across all runs".to_string(),
        );
    } else if rec_score == profile.recommendation_majority_score {
        acc.finding(
            FindingLevel::Warning,
            format!(
                "Recommendation varies: 2 of {} runs agree",
                profile.recommendation_majority_runs
            ),
        );
    } else {
        acc.finding(
            FindingLevel::Critical,
            "Recommendations are inconsistent across runs".to_string(),
        );
    }

    let total_score = normalized_total(acc.earned, acc.max_possible);
    let status_tier = profile.status_tier(total_score);
    let improvement_suggestions = suggestions(total_score, rec_score, profile);
    let key_variance = derive_key_variance(runs, &acc.slots);

    tracing::info!(
        total = total_score,
        earned = acc.earned,
        max_possible = acc.max_possible,
        tier = status_tier.as_str(),
        "consistency scored"
    );

    Ok(ScoreReport {
        slots: acc.slots,
        earned_points: acc.earned,
        max_possible_points: acc.max_possible,
        slot_max: profile.slot_max,
        total_score,
        status_tier,
        findings: acc.findings,
        finding_levels: acc.levels,
        improvement_suggestions,
        key_variance,
    })
}

/// The `index`-th value of `family` from every run long enough to have one.
pub fn slot_values(runs: &[RunResult], family: MetricFamily, index: usize) -> Vec<f64> {
    runs.iter()
        .filter_map(|r| family.values(&r.metrics).get(index).copied())
        .collect()
}

pub fn score_numeric(values: &[f64], profile: &ScoringProfile) -> NumericOutcome {
    let Some(first) = values.first() else {
        return NumericOutcome {
            score: 0,
            variance_pct: 0.0,
        };
    };
    if values.iter().all(|v| v.to_bits() == first.to_bits()) {
        return NumericOutcome {
            score: profile.exact_match_score,
            variance_pct: 0.0,
        };
    }

    let avg = values.iter().sum::<f64>() / values.len() as f64;
    // Zero or overflowed mean leaves relative deviation undefined.
    if avg == 0.0 || !avg.is_finite() {
        return NumericOutcome {
            score: 0,
            variance_pct: profile.zero_mean_variance,
        };
    }

    let variance_pct = values
        .iter()
        .map(|v| (v - avg).abs() / avg * 100.0)
        .fold(0.0f64, |acc, dev| {
            if acc.is_nan() || dev.is_nan() {
                f64::NAN
            } else {
                acc.max(dev)
            }
        });
    if !variance_pct.is_finite() {
        return NumericOutcome {
            score: 0,
            variance_pct: profile.zero_mean_variance,
        };
    }

    NumericOutcome {
        score: profile.band_score(variance_pct),
        variance_pct,
    }
}

pub fn score_recommendations(tags: &[Recommendation], profile: &ScoringProfile) -> u32 {
    let distinct = tags.iter().collect::<BTreeSet<_>>().len();
    if distinct == 1 {
        profile.slot_max
    } else if distinct == 2 && tags.len() == profile.recommendation_majority_runs {
        profile.recommendation_majority_score
    } else {
        0
    }
}

pub fn normalized_total(earned: u32, max_possible: u32) -> u32 {
    if max_possible == 0 {
        return 0;
    }
    (earned as f64 / max_possible as f64 * 100.0).round() as u32
}

pub fn suggestions(total: u32, recommendation_score: u32, profile: &ScoringProfile) -> Vec<String> {
    let mut out = Vec::new();
    if total < profile.production_ready_min {
        out.push(SUGGEST_OUTPUT_CONTRACT.to_string());
    }
    if total < profile.needs_tuning_min {
        out.push(SUGGEST_TEMPERATURE.to_string());
    }
    if total < profile.needs_prompt_engineering_min {
        out.push(SUGGEST_VALIDATION_STEPS.to_string());
        out.push(SUGGEST_DECOMPOSE.to_string());
    }
    if recommendation_score < profile.slot_max {
        out.push(SUGGEST_DECISION_CRITERIA.to_string());
    }
    out
}

/// Headline for the first percentage (usually ROI) when the runs disagree on it.
pub fn derive_key_variance(runs: &[RunResult], slots: &[SlotScore]) -> Option<KeyVariance> {
    let firsts = runs
        .iter()
        .filter_map(|r| r.metrics.percentages.first().copied())
        .collect::<Vec<_>>();
    if firsts.len() < 2 || firsts.iter().all(|v| *v == firsts[0]) {
        return None;
    }
    let lo = firsts.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = firsts.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance_pct = slots
        .iter()
        .find(|s| s.key == SlotKey::numeric(MetricFamily::Percentage, 0))
        .and_then(|s| s.variance_pct);

    Some(KeyVariance {
        metric_name: "ROI".to_string(),
        values: firsts.iter().map(|v| format_percent(*v)).collect(),
        variance_pct,
        problem_statement: format!(
            "ROI ranges from {} to {} across {} runs",
            format_percent(lo),
            format_percent(hi),
            firsts.len()
        ),
    })
}

#[derive(Default)]
struct Accumulator {
    slots: Vec<SlotScore>,
    earned: u32,
    max_possible: u32,
    findings: Vec<String>,
    levels: Vec<FindingLevel>,
}

impl Accumulator {
    fn push_slot(&mut self, slot: SlotScore, slot_max: u32) {
        self.earned += slot.score;
        self.max_possible += slot_max;
        self.slots.push(slot);
    }

    fn finding(&mut self, level: FindingLevel, message: String) {
        self.findings.push(message);
        self.levels.push(level);
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
