pub mod metrics;
pub mod profile;
pub mod score;
pub mod slots;

pub use metrics::{MetricRecord, Recommendation, RunResult};
pub use profile::ScoringProfile;
pub use score::{FindingLevel, KeyVariance, ScoreReport, SlotScore, StatusTier};
pub use slots::{MetricFamily, SlotKey};
