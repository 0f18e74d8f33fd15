/// Converts a raw minute count into a short human-readable duration.
///
/// Non-positive, NaN, and non-finite inputs all collapse to `"0m"`.
pub fn format_duration(minutes: f64) -> String {
    if !minutes.is_finite() || minutes <= 0.0 {
        return "0m".to_string();
    }
    let hours = (minutes / 60.0).floor() as u64;
    let mins = (minutes % 60.0).floor() as u64;
    if hours >= 1 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}
