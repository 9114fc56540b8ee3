use crate::bmi::types::BmiResult;
use serde::Serialize;

/// Text written into the four output regions for one result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResult {
    pub bmi: String,
    pub classification: String,
    pub range_low: String,
    pub range_high: String,
}

impl RenderedResult {
    pub fn from_result(result: &BmiResult) -> Self {
        let suffix = result.unit.weight_suffix();
        Self {
            bmi: format_one_decimal(result.bmi),
            classification: result.classification.label().to_string(),
            range_low: format!("{}{}", format_one_decimal(result.healthy_range.low), suffix),
            range_high: format!("{}{}", format_one_decimal(result.healthy_range.high), suffix),
        }
    }
}

/// Format with exactly one decimal place.
/// Exact ties round away from zero, so 22.25 shows as "22.3" the way a browser would,
/// and magnitudes from 1e21 up use exponent notation ("1e+25").
pub fn format_one_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Browsers switch to exponent notation from 1e21 on
    if value.abs() >= 1e21 {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    // Negative zero shows unsigned
    let value = if value == 0.0 { 0.0 } else { value };

    // Only multiples of 0.25 can sit exactly halfway between two tenths
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
