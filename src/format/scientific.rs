/// Renders `value` as `"<mantissa> * 10^<exponent>"` with a three-decimal
/// mantissa, e.g. `1234.0` becomes `"1.234 * 10^3"`.
///
/// Values without a finite exponent (infinity, NaN) are returned as their
/// plain textual form.
pub fn custom_scientific_notation(value: f64) -> String {
    let formatted = format!("{:.3e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => format!("{} * 10^{}", mantissa, exponent),
            Err(_) => formatted,
        },
        None => formatted,
    }
}
