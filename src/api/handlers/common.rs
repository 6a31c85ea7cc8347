/// Parse a raw query value as a decimal number.
///
/// A missing or unparseable value becomes the NaN sentinel: the formula
/// is still evaluated and the non-numeric result flows into the response
/// rather than aborting the request.
pub fn parse_decimal(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Format a result with exactly two decimal digits, trailing zeros kept.
///
/// Infinite values keep the "Infinity"/"-Infinity" spelling on the wire;
/// NaN formats as "NaN".
pub fn format_fixed(value: f64) -> String {
    if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{:.2}", value)
    }
}
