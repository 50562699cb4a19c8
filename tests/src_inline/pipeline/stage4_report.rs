use super::*;
use crate::pipeline::stage1_collect::collect_texts;
use crate::pipeline::stage2_score::score;
use crate::pipeline::stage3_table::render_table;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_trustscore_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_write_reports_creates_files() {
    let runs = collect_texts(&[
        "$1,000 ROI 20% Recommendation: PROCEED",
        "$1,000 ROI 25% Recommendation: PROCEED",
    ]);
    let report = score(&runs).unwrap();
    let table = render_table(&runs);
    let ctx = ReportContext {
        tool_name: "kira-trustscore".to_string(),
        tool_version: "0.1.0".to_string(),
        scenario: Some("pricing".to_string()),
        runs: &runs,
        score: &report,
        table: &table,
        headline: None,
    };

    let out = make_temp_dir().join("nested");
    write_reports(&ctx, &out).unwrap();

    let tsv = std::fs::read_to_string(out.join(COMPARISON_FILE)).unwrap();
    assert!(tsv.starts_with("metric\tRun #1\tRun #2\n"));
    assert!(tsv.contains("Percentage 1\t20.0%\t25.0%\n"));

    let json = std::fs::read_to_string(out.join(SUMMARY_FILE)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["scenario"], "pricing");
    assert_eq!(v["total_score"], report.total_score);

    let text = std::fs::read_to_string(out.join(REPORT_FILE)).unwrap();
    assert!(text.starts_with("Output Consistency Report\n"));
}

#[test]
fn test_write_reports_fails_on_file_path() {
    let dir = make_temp_dir();
    let blocker = dir.join("not_a_dir");
    std::fs::write(&blocker, "x").unwrap();

    let runs = collect_texts(&["a", "b"]);
    let report = score(&runs).unwrap();
    let table = render_table(&runs);
    let ctx = ReportContext {
        tool_name: "kira-trustscore".to_string(),
        tool_version: "0.1.0".to_string(),
        scenario: None,
        runs: &runs,
        score: &report,
        table: &table,
        headline: None,
    };
    let err = write_reports(&ctx, &blocker).unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
}
