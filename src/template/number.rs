//! Numeric formatting for template values

/// Largest accepted `timeDependencyDecimalPrecision`
pub const MAX_DECIMAL_PRECISION: usize = 15;

/// Format a time dependence value for `%t`
///
/// The value is scaled by `10^decimal_offset` and printed fixed-point with
/// exactly `decimal_precision` fractional digits, halves rounded away from
/// zero. No grouping separators; output never depends on the host locale.
/// Precision is capped at [`MAX_DECIMAL_PRECISION`].
pub fn format_timing(value: f64, decimal_offset: i32, decimal_precision: usize) -> String {
    let precision = decimal_precision.min(MAX_DECIMAL_PRECISION);
    let scaled = value * 10f64.powi(decimal_offset);
    let factor = 10f64.powi(precision as i32);
    let rounded = (scaled * factor).round() / factor;
    format!("{:.*}", precision, rounded)
}

/// Format a percentage with no decimals, halves rounded away from zero
#[inline]
pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => (p.round() as i64).to_string(),
        None => "0".to_string(),
    }
}
