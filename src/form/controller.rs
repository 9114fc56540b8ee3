use crate::bmi::calculator::{compute_imperial, compute_metric};
use crate::bmi::formatter::RenderedResult;
use crate::bmi::input::InputPolicy;
use crate::bmi::types::{BmiResult, ImperialMeasurement, MetricMeasurement};
use crate::bmi::units::UnitSystem;
use crate::form::view::*;
use log::{debug, trace};
use serde::Serialize;

/// Which of the two output containers is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayState {
    Placeholder,
    Results,
}

/// A single user interaction with the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    UnitSelected(UnitSystem),
    FieldChanged(FieldId, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub unit: UnitSystem,
    pub display: DisplayState,
}

/// Drives a bound form: unit switching, recalculation on input, rendering.
/// Each handler runs to completion before the next event is taken.
pub struct FormController<V: FormView> {
    view: V,
    unit: UnitSystem,
    display: DisplayState,
    policy: InputPolicy,
}

impl<V: FormView> FormController<V> {
    /// Bind a controller to its view and bring the view into the starting state
    /// for `unit`: matching input group shown, placeholder shown.
    pub fn new(view: V, unit: UnitSystem, policy: InputPolicy) -> Self {
        let mut controller = Self {
            view,
            unit,
            display: DisplayState::Placeholder,
            policy,
        };
        controller.switch_unit_system(unit);
        controller
    }

    pub fn handle(&mut self, event: FormEvent) -> Option<BmiResult> {
        match event {
            FormEvent::UnitSelected(unit) => {
                self.switch_unit_system(unit);
                None
            }
            FormEvent::FieldChanged(field, value) => {
                self.view.write_field(field, &value);
                match field.unit_system() {
                    UnitSystem::Metric => self.calculate_metric_bmi(),
                    UnitSystem::Imperial => self.calculate_imperial_bmi(),
                }
            }
        }
    }

    pub fn switch_unit_system(&mut self, target: UnitSystem) {
        debug!("Switching unit system to {}", target);

        let hidden = target.other();
        self.view.set_visible(Panel::inputs_for(target), true);
        self.view.set_visible(Panel::inputs_for(hidden), false);
        for field in FieldId::group(hidden) {
            self.view.write_field(*field, "");
        }

        self.view.set_visible(Panel::Results, false);
        self.view.set_visible(Panel::Welcome, true);

        self.unit = target;
        self.display = DisplayState::Placeholder;
    }

    /// Recalculate from the metric fields. Leaves the view untouched when the
    /// height or weight is not strictly positive.
    pub fn calculate_metric_bmi(&mut self) -> Option<BmiResult> {
        let height_cm = self.policy.resolve(&self.view.read(FieldId::HeightCm));
        let weight_kg = self.policy.resolve(&self.view.read(FieldId::WeightKg));

        let result = match (height_cm, weight_kg) {
            (Some(height_cm), Some(weight_kg)) => compute_metric(&MetricMeasurement {
                height_cm,
                weight_kg,
            }),
            _ => None,
        };
        self.render_if_some(result)
    }

    /// Recalculate from the imperial fields. Leaves the view untouched when the
    /// total height or total weight is not strictly positive.
    pub fn calculate_imperial_bmi(&mut self) -> Option<BmiResult> {
        let feet = self.policy.resolve(&self.view.read(FieldId::HeightFt));
        let inches = self.policy.resolve(&self.view.read(FieldId::HeightIn));
        let stone = self.policy.resolve(&self.view.read(FieldId::WeightSt));
        let pounds = self.policy.resolve(&self.view.read(FieldId::WeightLb));

        let result = match (feet, inches, stone, pounds) {
            (Some(feet), Some(inches), Some(stone), Some(pounds)) => {
                compute_imperial(&ImperialMeasurement {
                    feet,
                    inches,
                    stone,
                    pounds,
                })
            }
            _ => None,
        };
        self.render_if_some(result)
    }

    fn render_if_some(&mut self, result: Option<BmiResult>) -> Option<BmiResult> {
        match result {
            Some(result) => {
                self.render(&result);
                Some(result)
            }
            None => {
                trace!("Calculation skipped: inputs not positive");
                None
            }
        }
    }

    fn render(&mut self, result: &BmiResult) {
        let rendered = RenderedResult::from_result(result);
        debug!(
            "Rendering BMI {} ({}), healthy range {} - {}",
            rendered.bmi, rendered.classification, rendered.range_low, rendered.range_high
        );

        self.view.write_text(OutputRegion::Bmi, &rendered.bmi);
        self.view
            .write_text(OutputRegion::Classification, &rendered.classification);
        self.view.write_text(OutputRegion::RangeLow, &rendered.range_low);
        self.view.write_text(OutputRegion::RangeHigh, &rendered.range_high);

        self.view.set_visible(Panel::Welcome, false);
        self.view.set_visible(Panel::Results, true);
        self.display = DisplayState::Results;
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            unit: self.unit,
            display: self.display,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}
