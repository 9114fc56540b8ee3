use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Leading numeric prefix of a field value, the way a browser's parseFloat reads it.
    /// Examples: "170", "70.5kg", ".5", "1e2", "-3", "Infinity"
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(Infinity|([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?)"
    ).unwrap();
}

/// Parse the leading number of a raw field value.
/// Returns None when the text has no numeric prefix (including empty text).
pub fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let m = NUMERIC_PREFIX.find(trimmed)?;
    m.as_str().parse::<f64>().ok()
}

/// How unparsable field text is treated before a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Unparsable text reads as 0
    #[default]
    Lenient,
    /// Empty text reads as 0; any other unparsable text cancels the calculation
    Strict,
}

impl InputPolicy {
    /// Resolve a raw field value to a number, or None to skip the calculation.
    pub fn resolve(self, raw: &str) -> Option<f64> {
        match parse_field(raw) {
            Some(v) => Some(v),
            None => match self {
                InputPolicy::Lenient => Some(0.0),
                InputPolicy::Strict if raw.trim().is_empty() => Some(0.0),
                InputPolicy::Strict => None,
            },
        }
    }
}
