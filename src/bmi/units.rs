use crate::bmi::error::BmiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CM_PER_METER: f64 = 100.0;
pub const INCHES_PER_FOOT: f64 = 12.0;
pub const POUNDS_PER_STONE: f64 = 14.0;
/// Factor turning lb/in² into kg/m²
pub const IMPERIAL_BMI_FACTOR: f64 = 703.0;

/// Which input group is active, and which weight unit results are shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Suffix appended to healthy-weight bounds
    pub fn weight_suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kgs",
            UnitSystem::Imperial => "lbs",
        }
    }

    pub fn other(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(BmiError::UnknownUnit(other.to_string())),
        }
    }
}
