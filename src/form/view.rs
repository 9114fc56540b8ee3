use crate::bmi::error::BmiError;
use crate::bmi::units::UnitSystem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six numeric input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    HeightCm,
    WeightKg,
    HeightFt,
    HeightIn,
    WeightSt,
    WeightLb,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::HeightCm,
        FieldId::WeightKg,
        FieldId::HeightFt,
        FieldId::HeightIn,
        FieldId::WeightSt,
        FieldId::WeightLb,
    ];

    /// Input group the field lives in
    pub fn unit_system(self) -> UnitSystem {
        match self {
            FieldId::HeightCm | FieldId::WeightKg => UnitSystem::Metric,
            FieldId::HeightFt | FieldId::HeightIn | FieldId::WeightSt | FieldId::WeightLb => {
                UnitSystem::Imperial
            }
        }
    }

    /// Fields belonging to one input group
    pub fn group(unit: UnitSystem) -> &'static [FieldId] {
        match unit {
            UnitSystem::Metric => &[FieldId::HeightCm, FieldId::WeightKg],
            UnitSystem::Imperial => &[
                FieldId::HeightFt,
                FieldId::HeightIn,
                FieldId::WeightSt,
                FieldId::WeightLb,
            ],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::HeightCm => "height_cm",
            FieldId::WeightKg => "weight_kg",
            FieldId::HeightFt => "height_ft",
            FieldId::HeightIn => "height_in",
            FieldId::WeightSt => "weight_st",
            FieldId::WeightLb => "weight_lb",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| BmiError::UnknownField(s.to_string()))
    }
}

/// Text regions the result is written into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputRegion {
    Bmi,
    Classification,
    RangeLow,
    RangeHigh,
}

impl OutputRegion {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputRegion::Bmi => "bmi",
            OutputRegion::Classification => "classification",
            OutputRegion::RangeLow => "range_low",
            OutputRegion::RangeHigh => "range_high",
        }
    }
}

/// Containers whose visibility the controller toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Welcome,
    Results,
    MetricInputs,
    ImperialInputs,
}

impl Panel {
    pub fn inputs_for(unit: UnitSystem) -> Self {
        match unit {
            UnitSystem::Metric => Panel::MetricInputs,
            UnitSystem::Imperial => Panel::ImperialInputs,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Panel::Welcome => "welcome",
            Panel::Results => "results",
            Panel::MetricInputs => "metric",
            Panel::ImperialInputs => "imperial",
        }
    }
}

/// Bindings between the controller and whatever surface shows the form
pub trait FormView {
    /// Current raw text of an input field
    fn read(&self, field: FieldId) -> String;

    fn write_field(&mut self, field: FieldId, value: &str);

    fn write_text(&mut self, region: OutputRegion, text: &str);

    fn set_visible(&mut self, panel: Panel, visible: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(field.as_str().parse::<FieldId>().unwrap(), field);
        }
        assert!(matches!(
            "waist_cm".parse::<FieldId>(),
            Err(BmiError::UnknownField(_))
        ));
    }

    #[test]
    fn test_groups_partition_fields() {
        for field in FieldId::ALL {
            let group = FieldId::group(field.unit_system());
            assert!(group.contains(&field));
            assert!(!FieldId::group(field.unit_system().other()).contains(&field));
        }
    }
}
