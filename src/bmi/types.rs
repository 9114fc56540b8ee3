use crate::bmi::units::{UnitSystem, CM_PER_METER, INCHES_PER_FOOT, POUNDS_PER_STONE};
use serde::Serialize;
use std::fmt;

/// Height and weight as entered in metric mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricMeasurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl MetricMeasurement {
    pub fn height_m(&self) -> f64 {
        self.height_cm / CM_PER_METER
    }
}

/// Height and weight as entered in imperial mode
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImperialMeasurement {
    pub feet: f64,
    pub inches: f64,
    pub stone: f64,
    pub pounds: f64,
}

impl ImperialMeasurement {
    pub fn total_inches(&self) -> f64 {
        self.feet * INCHES_PER_FOOT + self.inches
    }

    pub fn total_pounds(&self) -> f64 {
        self.stone * POUNDS_PER_STONE + self.pounds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl Classification {
    /// Text shown in the classification display
    pub fn label(self) -> &'static str {
        match self {
            Classification::Underweight => "underweight",
            Classification::Healthy => "a healthy weight",
            Classification::Overweight => "overweight",
            Classification::Obese => "obese",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weights at the given height whose BMI falls in the healthy band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthyWeightRange {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub classification: Classification,
    pub healthy_range: HealthyWeightRange,
    /// Unit system the range is expressed in
    pub unit: UnitSystem,
}
