//! Time formatting utilities

/// Format seconds for a transcoder command line
///
/// Uses the shortest decimal that round-trips, never exponent notation,
/// and always keeps a fractional part (`1.0`, `0.04`, `2.5`).
pub fn format_seconds(seconds: f64) -> String {
    let formatted = seconds.to_string();
    if formatted.contains('.') || !seconds.is_finite() {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}
