/// Render a result the way the keypad's display expects.
///
/// Magnitudes in `[1e-3, 1e7)` and zero print as plain decimals with at least
/// one fractional digit (`14.0`, `0.001`). Everything else uses scientific
/// form with the same rule on the mantissa (`1.0E7`, `2.5E-5`). Infinities
/// read `Infinity` / `-Infinity` and NaN reads `NaN`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug keeps a trailing ".0" and never switches to exponent form in this range
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}
