use crate::model::Recommendation;

const ANCHOR: &str = "recommendation:";

/// Evaluated top to bottom; the first rule with any matching keyword wins.
/// "proceed with caution" has to be tested before the bare "proceed".
pub const RULES: &[(Recommendation, &[&str])] = &[
    (
        Recommendation::DoNotProceed,
        &[
            "do not proceed",
            "not recommended",
            "reconsider",
            "advise against",
        ],
    ),
    (
        Recommendation::ProceedWithCaution,
        &["proceed with caution", "conditional", "carefully consider"],
    ),
    (
        Recommendation::Proceed,
        &["proceed", "recommend", "go ahead", "move forward", "approve"],
    ),
];

/// Text window the recommendation is classified from.
///
/// Everything from the first case-insensitive `recommendation:` anchor to the
/// end of the text; otherwise the first `.`-delimited sentence mentioning both
/// "should" and "proceed"; otherwise empty.
pub fn evidence_window(text: &str) -> &str {
    // ASCII lowering keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    if let Some(pos) = lower.find(ANCHOR) {
        return text[pos..].trim();
    }
    text.split('.')
        .find(|sentence| {
            let s = sentence.to_lowercase();
            s.contains("should") && s.contains("proceed")
        })
        .map(str::trim)
        .unwrap_or("")
}

pub fn classify(evidence: &str) -> Recommendation {
    let lower = evidence.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(tag, _)| *tag)
        .unwrap_or(Recommendation::Unclear)
}
