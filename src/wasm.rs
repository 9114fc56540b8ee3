// WebAssembly bindings for driving the BMI form from a web page
use crate::bmi;
use crate::config::Config;
use crate::form::{FieldId, FormController, FormEvent, FormView, OutputRegion, Panel};
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Form surface backed by JavaScript callbacks supplied by the page.
/// The bindings object must expose `read(id)`, `write(id, text)` and `setVisible(id, bool)`.
pub struct JsView {
    this: JsValue,
    read: Function,
    write: Function,
    set_visible: Function,
}

impl JsView {
    pub fn from_bindings(bindings: JsValue) -> Result<Self, JsValue> {
        let read = bound_function(&bindings, "read")?;
        let write = bound_function(&bindings, "write")?;
        let set_visible = bound_function(&bindings, "setVisible")?;
        Ok(Self {
            this: bindings,
            read,
            write,
            set_visible,
        })
    }

    fn write_id(&self, id: &str, text: &str) {
        if let Err(e) = self
            .write
            .call2(&self.this, &JsValue::from_str(id), &JsValue::from_str(text))
        {
            log::warn!("write({}) failed: {:?}", id, e);
        }
    }
}

fn bound_function(bindings: &JsValue, name: &str) -> Result<Function, JsValue> {
    Reflect::get(bindings, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("Bindings object has no function '{}'", name)))
}

impl FormView for JsView {
    fn read(&self, field: FieldId) -> String {
        match self.read.call1(&self.this, &JsValue::from_str(field.as_str())) {
            Ok(value) => value.as_string().unwrap_or_default(),
            Err(e) => {
                log::warn!("read({}) failed: {:?}", field, e);
                String::new()
            }
        }
    }

    fn write_field(&mut self, field: FieldId, value: &str) {
        self.write_id(field.as_str(), value);
    }

    fn write_text(&mut self, region: OutputRegion, text: &str) {
        self.write_id(region.as_str(), text);
    }

    fn set_visible(&mut self, panel: Panel, visible: bool) {
        if let Err(e) = self.set_visible.call2(
            &self.this,
            &JsValue::from_str(panel.as_str()),
            &JsValue::from_bool(visible),
        ) {
            log::warn!("setVisible({}) failed: {:?}", panel.as_str(), e);
        }
    }
}

#[wasm_bindgen]
pub struct BmiFormWasm {
    controller: FormController<JsView>,
}

#[wasm_bindgen]
impl BmiFormWasm {
    /// Bind the form to a page. `config_content` is an optional TOML document.
    #[wasm_bindgen(constructor)]
    pub fn new(bindings: JsValue, config_content: Option<String>) -> Result<BmiFormWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => Config::empty(),
        };
        let view = JsView::from_bindings(bindings)?;

        Ok(Self {
            controller: FormController::new(view, config.default_unit, config.input_policy),
        })
    }

    /// Handle a click on one of the unit selectors ("metric" or "imperial")
    #[wasm_bindgen(js_name = selectUnit)]
    pub fn select_unit(&mut self, unit: &str) -> Result<(), JsValue> {
        let unit = unit
            .parse::<bmi::UnitSystem>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.controller.handle(FormEvent::UnitSelected(unit));
        Ok(())
    }

    /// Handle an input event on a numeric field
    #[wasm_bindgen]
    pub fn input(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        let field = field
            .parse::<FieldId>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.controller
            .handle(FormEvent::FieldChanged(field, value.to_string()));
        Ok(())
    }

    /// Current form state as JSON: {"unit": ..., "display": ...}
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.controller.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize snapshot: {}", e)))
    }
}

/// Compute a metric result without a bound form.
/// Returns the rendered result as JSON, or "null" when the inputs are not positive.
#[wasm_bindgen(js_name = computeMetric)]
pub fn compute_metric(height_cm: &str, weight_kg: &str) -> Result<String, JsValue> {
    let policy = bmi::InputPolicy::default();
    let rendered = match (policy.resolve(height_cm), policy.resolve(weight_kg)) {
        (Some(height_cm), Some(weight_kg)) => bmi::compute_metric(&bmi::MetricMeasurement {
            height_cm,
            weight_kg,
        })
        .map(|result| bmi::RenderedResult::from_result(&result)),
        _ => None,
    };

    serde_json::to_string(&rendered)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

/// Compute an imperial result without a bound form.
/// Returns the rendered result as JSON, or "null" when the totals are not positive.
#[wasm_bindgen(js_name = computeImperial)]
pub fn compute_imperial(
    feet: &str,
    inches: &str,
    stone: &str,
    pounds: &str,
) -> Result<String, JsValue> {
    let policy = bmi::InputPolicy::default();
    let rendered = match (
        policy.resolve(feet),
        policy.resolve(inches),
        policy.resolve(stone),
        policy.resolve(pounds),
    ) {
        (Some(feet), Some(inches), Some(stone), Some(pounds)) => {
            bmi::compute_imperial(&bmi::ImperialMeasurement {
                feet,
                inches,
                stone,
                pounds,
            })
            .map(|result| bmi::RenderedResult::from_result(&result))
        }
        _ => None,
    };

    serde_json::to_string(&rendered)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

/// Classification label for a BMI value
#[wasm_bindgen]
pub fn classify(value: f64) -> String {
    bmi::classify(value).label().to_string()
}
