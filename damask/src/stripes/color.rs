/// Converts an intensity percentage to a two-digit uppercase hex value.
///
/// Out-of-range input clamps to `[0, 100]`; fractional percentages round to
/// the nearest integer intensity before conversion.
pub fn percent_to_hex(percent: f64) -> String {
    let percent = percent.clamp(0.0, 100.0).round();
    let value = (percent / 100.0 * 255.0).round() as u8;
    format!("{value:02X}")
}

/// Appends an alpha suffix to a color, turning `#RRGGBB` at 85% into
/// `#RRGGBBD9`.
pub fn with_alpha(base: &str, percent: f64) -> String {
    format!("{base}{}", percent_to_hex(percent))
}
