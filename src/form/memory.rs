use crate::form::view::*;
use serde::Serialize;
use std::collections::HashMap;

/// In-memory form surface, used by the CLI and by tests
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    fields: HashMap<FieldId, String>,
    outputs: HashMap<OutputRegion, String>,
    visible: HashMap<Panel, bool>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, region: OutputRegion) -> Option<&str> {
        self.outputs.get(&region).map(String::as_str)
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible.get(&panel).copied().unwrap_or(false)
    }

    pub fn state(&self) -> ViewState {
        ViewState {
            bmi: self.text(OutputRegion::Bmi).map(str::to_string),
            classification: self.text(OutputRegion::Classification).map(str::to_string),
            range_low: self.text(OutputRegion::RangeLow).map(str::to_string),
            range_high: self.text(OutputRegion::RangeHigh).map(str::to_string),
            welcome_visible: self.is_visible(Panel::Welcome),
            results_visible: self.is_visible(Panel::Results),
            metric_visible: self.is_visible(Panel::MetricInputs),
            imperial_visible: self.is_visible(Panel::ImperialInputs),
        }
    }
}

impl FormView for MemoryView {
    fn read(&self, field: FieldId) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn write_field(&mut self, field: FieldId, value: &str) {
        self.fields.insert(field, value.to_string());
    }

    fn write_text(&mut self, region: OutputRegion, text: &str) {
        self.outputs.insert(region, text.to_string());
    }

    fn set_visible(&mut self, panel: Panel, visible: bool) {
        self.visible.insert(panel, visible);
    }
}

/// Everything a reader of the form can see, for comparison and JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub bmi: Option<String>,
    pub classification: Option<String>,
    pub range_low: Option<String>,
    pub range_high: Option<String>,
    pub welcome_visible: bool,
    pub results_visible: bool,
    pub metric_visible: bool,
    pub imperial_visible: bool,
}
