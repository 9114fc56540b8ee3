use crate::bmi::types::*;
use crate::bmi::units::{UnitSystem, IMPERIAL_BMI_FACTOR};

/// Lowest BMI counted as a healthy weight
pub const HEALTHY_FROM: f64 = 18.5;
/// Lowest BMI counted as overweight; also the top of the healthy range
pub const OVERWEIGHT_FROM: f64 = 24.9;
/// Lowest BMI counted as obese
pub const OBESE_FROM: f64 = 29.9;

/// Place a BMI value in its band. Bands are lower-inclusive, upper-exclusive.
pub fn classify(bmi: f64) -> Classification {
    if bmi < HEALTHY_FROM {
        Classification::Underweight
    } else if bmi < OVERWEIGHT_FROM {
        Classification::Healthy
    } else if bmi < OBESE_FROM {
        Classification::Overweight
    } else {
        Classification::Obese
    }
}

/// Compute BMI from centimeters and kilograms.
/// Returns None unless both height and weight are strictly positive.
pub fn compute_metric(m: &MetricMeasurement) -> Option<BmiResult> {
    if !(m.height_cm > 0.0 && m.weight_kg > 0.0) {
        return None;
    }

    let height_sq = m.height_m() * m.height_m();
    let bmi = m.weight_kg / height_sq;

    Some(BmiResult {
        bmi,
        classification: classify(bmi),
        healthy_range: HealthyWeightRange {
            low: HEALTHY_FROM * height_sq,
            high: OVERWEIGHT_FROM * height_sq,
        },
        unit: UnitSystem::Metric,
    })
}

/// Compute BMI from feet/inches and stone/pounds.
/// Returns None unless total inches and total pounds are both strictly positive.
pub fn compute_imperial(m: &ImperialMeasurement) -> Option<BmiResult> {
    let inches = m.total_inches();
    let pounds = m.total_pounds();
    if !(inches > 0.0 && pounds > 0.0) {
        return None;
    }

    let inches_sq = inches * inches;
    let bmi = (pounds / inches_sq) * IMPERIAL_BMI_FACTOR;

    Some(BmiResult {
        bmi,
        classification: classify(bmi),
        healthy_range: HealthyWeightRange {
            low: (HEALTHY_FROM * inches_sq) / IMPERIAL_BMI_FACTOR,
            high: (OVERWEIGHT_FROM * inches_sq) / IMPERIAL_BMI_FACTOR,
        },
        unit: UnitSystem::Imperial,
    })
}
