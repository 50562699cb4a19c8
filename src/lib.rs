//! Consistency scoring for repeated runs of one prompt against a text
//! generation model.
//!
//! [`extract`] turns a response into a [`MetricRecord`], [`score`] compares
//! the records of two or more runs slot by slot, and [`render_table`] lays
//! them out side by side.

pub mod extract;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use extract::{extract, lookup_metric};
pub use model::{MetricRecord, Recommendation, RunResult, ScoreReport, StatusTier};
pub use pipeline::stage1_collect::collect_texts;
pub use pipeline::stage2_score::{ScoreError, score};
pub use pipeline::stage3_table::{ComparisonTable, render_table};
