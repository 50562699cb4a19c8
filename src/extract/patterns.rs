use once_cell::sync::Lazy;
use regex::Regex;

/// `$1,234,567` or `$1,234,567.89`. Separators are stripped before parsing.
pub static DOLLAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$[\d,]+(?:\.\d{2})?").expect("valid dollar pattern"));

pub static PERCENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%").expect("valid percent pattern"));

pub static MONTHS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*months?").expect("valid months pattern"));

pub fn dollar_amounts(text: &str) -> Vec<f64> {
    DOLLAR_REGEX
        .find_iter(text)
        .filter_map(|m| {
            let clean: String = m
                .as_str()
                .chars()
                .filter(|c| *c != '$' && *c != ',')
                .collect();
            parse_decimal(&clean, m.as_str())
        })
        .collect()
}

pub fn percentages(text: &str) -> Vec<f64> {
    captured_numbers(&PERCENT_REGEX, text)
}

pub fn month_durations(text: &str) -> Vec<f64> {
    captured_numbers(&MONTHS_REGEX, text)
}

fn captured_numbers(regex: &Regex, text: &str) -> Vec<f64> {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| parse_decimal(m.as_str(), m.as_str()))
        .collect()
}

fn parse_decimal(clean: &str, raw: &str) -> Option<f64> {
    match clean.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            tracing::trace!(raw, "skipping malformed numeric match");
            None
        }
    }
}
