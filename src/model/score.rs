use serde::{Deserialize, Serialize};

use crate::model::slots::SlotKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusTier {
    ProductionReady,
    NeedsTuning,
    NeedsPromptEngineering,
    NotReady,
}

impl StatusTier {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusTier::ProductionReady => "PRODUCTION_READY",
            StatusTier::NeedsTuning => "NEEDS_TUNING",
            StatusTier::NeedsPromptEngineering => "NEEDS_PROMPT_ENGINEERING",
            StatusTier::NotReady => "NOT_READY",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusTier::ProductionReady => "Production ready",
            StatusTier::NeedsTuning => "Needs tuning",
            StatusTier::NeedsPromptEngineering => "Needs prompt engineering",
            StatusTier::NotReady => "Not ready for production",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingLevel {
    Ok,
    Warning,
    Critical,
}

impl FindingLevel {
    pub fn mark(self) -> &'static str {
        match self {
            FindingLevel::Ok => "[ok]",
            FindingLevel::Warning => "[warn]",
            FindingLevel::Critical => "[fail]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotScore {
    pub key: SlotKey,
    pub score: u32,
    /// `None` for the recommendation slot.
    pub variance_pct: Option<f64>,
    pub contributors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyVariance {
    pub metric_name: String,
    pub values: Vec<String>,
    #[serde(default)]
    pub variance_pct: Option<f64>,
    pub problem_statement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub slots: Vec<SlotScore>,
    pub earned_points: u32,
    pub max_possible_points: u32,
    /// Points a single slot can earn.
    pub slot_max: u32,
    pub total_score: u32,
    pub status_tier: StatusTier,
    pub findings: Vec<String>,
    #[serde(skip)]
    pub finding_levels: Vec<FindingLevel>,
    pub improvement_suggestions: Vec<String>,
    pub key_variance: Option<KeyVariance>,
}

impl ScoreReport {
    pub fn slot(&self, key: SlotKey) -> Option<&SlotScore> {
        self.slots.iter().find(|s| s.key == key)
    }

    pub fn slot_score(&self, key: SlotKey) -> Option<u32> {
        self.slot(key).map(|s| s.score)
    }

    pub fn slot_variance(&self, key: SlotKey) -> Option<f64> {
        self.slot(key).and_then(|s| s.variance_pct)
    }

    pub fn recommendation_score(&self) -> u32 {
        self.slot_score(SlotKey::Recommendation).unwrap_or(0)
    }

    /// Findings paired with their display level.
    pub fn leveled_findings(&self) -> impl Iterator<Item = (FindingLevel, &str)> {
        self.findings.iter().enumerate().map(|(i, f)| {
            let level = self
                .finding_levels
                .get(i)
                .copied()
                .unwrap_or(FindingLevel::Warning);
            (level, f.as_str())
        })
    }
}
