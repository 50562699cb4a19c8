use crate::model::score::StatusTier;
use crate::model::slots::MetricFamily;

#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub dollar_slots: usize,
    pub percentage_slots: usize,
    pub month_slots: usize,
    pub min_contributors: usize,

    pub slot_max: u32,
    pub exact_match_score: u32,
    /// (exclusive upper bound on variance %, score), checked in order.
    pub variance_bands: [(f64, u32); 3],
    pub zero_mean_variance: f64,

    pub recommendation_majority_score: u32,
    pub recommendation_majority_runs: usize,

    pub dollar_finding_pct: f64,
    pub percentage_finding_pct: f64,
    pub month_finding_pct: f64,

    pub production_ready_min: u32,
    pub needs_tuning_min: u32,
    pub needs_prompt_engineering_min: u32,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            dollar_slots: 5,
            percentage_slots: 3,
            month_slots: 2,
            min_contributors: 2,
            slot_max: 25,
            exact_match_score: 25,
            variance_bands: [(2.0, 20), (5.0, 15), (10.0, 10)],
            zero_mean_variance: 100.0,
            recommendation_majority_score: 15,
            recommendation_majority_runs: 3,
            dollar_finding_pct: 2.0,
            percentage_finding_pct: 5.0,
            month_finding_pct: 10.0,
            production_ready_min: 95,
            needs_tuning_min: 85,
            needs_prompt_engineering_min: 70,
        }
    }

    pub fn slot_count(&self, family: MetricFamily) -> usize {
        match family {
            MetricFamily::DollarAmount => self.dollar_slots,
            MetricFamily::Percentage => self.percentage_slots,
            MetricFamily::MonthDuration => self.month_slots,
        }
    }

    pub fn finding_threshold(&self, family: MetricFamily) -> f64 {
        match family {
            MetricFamily::DollarAmount => self.dollar_finding_pct,
            MetricFamily::Percentage => self.percentage_finding_pct,
            MetricFamily::MonthDuration => self.month_finding_pct,
        }
    }

    /// Score for a non-identical slot with the given max relative deviation.
    pub fn band_score(&self, variance_pct: f64) -> u32 {
        for &(upper, score) in &self.variance_bands {
            if variance_pct < upper {
                return score;
            }
        }
        0
    }

    pub fn status_tier(&self, total: u32) -> StatusTier {
        if total >= self.production_ready_min {
            StatusTier::ProductionReady
        } else if total >= self.needs_tuning_min {
            StatusTier::NeedsTuning
        } else if total >= self.needs_prompt_engineering_min {
            StatusTier::NeedsPromptEngineering
        } else {
            StatusTier::NotReady
        }
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
