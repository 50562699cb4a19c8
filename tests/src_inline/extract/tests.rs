use super::*;

#[test]
fn test_extract_basic_response() {
    let text = "Annual savings: $1,500,000. ROI: 250%. Payback: 8.5 months. Recommendation: PROCEED";
    let m = extract(text);
    assert_eq!(m.dollar_amounts, vec![1_500_000.0]);
    assert_eq!(m.percentages, vec![250.0]);
    assert_eq!(m.month_durations, vec![8.5]);
    assert_eq!(m.recommendation, Recommendation::Proceed);
    assert_eq!(m.recommendation_evidence, "Recommendation: PROCEED");
}

#[test]
fn test_extract_empty_text() {
    let m = extract("");
    assert_eq!(m, MetricRecord::default());
    assert_eq!(m.recommendation, Recommendation::Unclear);
    assert!(m.recommendation_evidence.is_empty());
}

#[test]
fn test_dollar_amounts_order_and_duplicates() {
    let m = extract("First $300, then $100, then $300 again");
    assert_eq!(m.dollar_amounts, vec![300.0, 100.0, 300.0]);
}

#[test]
fn test_dollar_amount_fraction_requires_two_digits() {
    let m = extract("Cost $1,234.56 versus $1,234.5 quoted");
    assert_eq!(m.dollar_amounts, vec![1234.56, 1234.0]);
}

#[test]
fn test_dollar_amount_malformed_match_skipped() {
    let m = extract("Prices in $, not euros; the fee is $5");
    assert_eq!(m.dollar_amounts, vec![5.0]);
}

#[test]
fn test_out_of_range_numbers_skipped() {
    let huge = "9".repeat(400);
    let m = extract(&format!("Cost ${huge} or $5; margin {huge}% then 12%; {huge} months"));
    assert_eq!(m.dollar_amounts, vec![5.0]);
    assert_eq!(m.percentages, vec![12.0]);
    assert!(m.month_durations.is_empty());
}

#[test]
fn test_dollar_amount_with_suffix() {
    let m = extract("- Current State: $4,760,000/year\n- Savings per Month: ~$138,000");
    assert_eq!(m.dollar_amounts, vec![4_760_000.0, 138_000.0]);
}

#[test]
fn test_percentages_allow_whitespace() {
    let m = extract("Margin 45.2 % and ROI 100%, CSAT 78% -> 82%");
    assert_eq!(m.percentages, vec![45.2, 100.0, 78.0, 82.0]);
}

#[test]
fn test_month_durations_case_insensitive() {
    let m = extract("Payback in 12 Months, review after 1 month, pilot 3.5MONTHS");
    assert_eq!(m.month_durations, vec![12.0, 1.0, 3.5]);
}

#[test]
fn test_month_word_without_number_ignored() {
    let m = extract("Monthly savings are large; months of work ahead");
    assert!(m.month_durations.is_empty());
}

#[test]
fn test_recommendation_anchor_case_insensitive() {
    let m = extract("Summary first.\nRECOMMENDATION: Approve the budget");
    assert_eq!(m.recommendation, Recommendation::Proceed);
    assert_eq!(m.recommendation_evidence, "RECOMMENDATION: Approve the budget");
}

#[test]
fn test_recommendation_caution_before_proceed() {
    let m = extract("Recommendation: PROCEED WITH CAUTION given cash flow");
    assert_eq!(m.recommendation, Recommendation::ProceedWithCaution);
}

#[test]
fn test_recommendation_do_not_proceed_has_precedence() {
    let m = extract("Recommendation: proceed, but reconsider the timeline");
    assert_eq!(m.recommendation, Recommendation::DoNotProceed);
}

#[test]
fn test_recommendation_window_runs_to_end_of_text() {
    let m = extract("Recommendation: PROCEED\n\nThe plan is conditional on funding.");
    assert_eq!(m.recommendation, Recommendation::ProceedWithCaution);
    assert!(m.recommendation_evidence.ends_with("conditional on funding."));
}

#[test]
fn test_recommendation_sentence_fallback() {
    let m = extract("Costs are high. We should proceed with the plan. Done");
    assert_eq!(m.recommendation, Recommendation::Proceed);
    assert_eq!(m.recommendation_evidence, "We should proceed with the plan");
}

#[test]
fn test_recommendation_anchor_itself_matches_proceed_keyword() {
    // "recommendation:" contains "recommend".
    let m = extract("Recommendation: hold for now");
    assert_eq!(m.recommendation, Recommendation::Proceed);
    assert_eq!(m.recommendation_evidence, "Recommendation: hold for now");
}

#[test]
fn test_sentence_fallback_requires_should_and_proceed() {
    let m = extract("Should we proceed? Hard to say.");
    assert_eq!(m.recommendation, Recommendation::Proceed);
    let m = extract("Nobody knows. Should the team wait");
    assert_eq!(m.recommendation, Recommendation::Unclear);
    assert!(m.recommendation_evidence.is_empty());
}

#[test]
fn test_recommendation_unclear_without_evidence() {
    let m = extract("Numbers look fine. We recommend nothing here");
    assert_eq!(m.recommendation, Recommendation::Unclear);
    assert!(m.recommendation_evidence.is_empty());
}

#[test]
fn test_anchor_after_non_ascii_text() {
    let m = extract("Budget: €5 million — Recommendation: go ahead");
    assert_eq!(m.recommendation_evidence, "Recommendation: go ahead");
    assert_eq!(m.recommendation, Recommendation::Proceed);
}

#[test]
fn test_extract_is_deterministic() {
    let text = "ROI 632%, $4,760,000 over 36 months. Recommendation: PROCEED";
    assert_eq!(extract(text), extract(text));
}

#[test]
fn test_lookup_metric_by_name() {
    let m = extract("Savings $1,660,000 then $680,000. ROI: 632%. Payback 4.9 months. Recommendation: PROCEED");
    assert_eq!(
        lookup_metric(&m, "Annual Savings"),
        Some(MetricValue::Number(1_660_000.0))
    );
    assert_eq!(lookup_metric(&m, "ROI"), Some(MetricValue::Number(632.0)));
    assert_eq!(
        lookup_metric(&m, "Payback Period"),
        Some(MetricValue::Number(4.9))
    );
    assert_eq!(
        lookup_metric(&m, "Recommendation"),
        Some(MetricValue::Tag(Recommendation::Proceed))
    );
    assert_eq!(lookup_metric(&m, "headcount"), None);
}

#[test]
fn test_lookup_metric_missing_family() {
    let m = extract("Recommendation: PROCEED");
    assert_eq!(lookup_metric(&m, "total cost"), None);
}
