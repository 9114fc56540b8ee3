// BMI arithmetic, classification and display formatting
// Everything here is pure; the form controller decides when to call it

pub mod calculator;
pub mod error;
pub mod formatter;
pub mod input;
pub mod types;
pub mod units;

pub use calculator::{classify, compute_imperial, compute_metric};
pub use error::BmiError;
pub use formatter::{format_one_decimal, RenderedResult};
pub use input::{parse_field, InputPolicy};
pub use types::{
    BmiResult, Classification, HealthyWeightRange, ImperialMeasurement, MetricMeasurement,
};
pub use units::UnitSystem;
