pub const MISSING_CELL: &str = "N/A";

/// `$1,234,567.89`
pub fn format_currency(v: f64) -> String {
    let fixed = format!("{:.2}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 2);
    if v < 0.0 {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(int_part));
    out.push('.');
    out.push_str(frac_part);
    out
}

pub fn format_percent(v: f64) -> String {
    format!("{:.1}%", v)
}

pub fn format_months(v: f64) -> String {
    format!("{:.1} months", v)
}

pub fn format_variance(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:.1}%", v),
        None => "-".to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let n = digits.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
