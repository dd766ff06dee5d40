/// Placeholder shown for a field the collectors could not fill.
pub const MISSING: &str = "?";

pub fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Capitalised boolean, `True` or `False`.
pub fn format_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// `used / total` as a percentage; an empty total is 0.
pub fn ratio_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}

/// Parse a `df` style `"40%"` string. Anything unparsable is 0.
pub fn parse_percent(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().trim_end_matches('%').parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
