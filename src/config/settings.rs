use crate::bmi::error::BmiError;
use crate::bmi::input::InputPolicy;
use crate::bmi::units::UnitSystem;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WELCOME_TEXT: &str =
    "Welcome! Enter your height and weight and you'll see your BMI result here";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Unit system active when the form opens
    #[serde(default)]
    pub default_unit: UnitSystem,

    // How unparsable field text is read
    #[serde(default)]
    pub input_policy: InputPolicy,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    // Placeholder text shown while no result is available
    #[serde(default = "default_welcome_text")]
    pub welcome_text: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            welcome_text: default_welcome_text(),
        }
    }
}

fn default_welcome_text() -> String {
    DEFAULT_WELCOME_TEXT.to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, BmiError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, BmiError> {
        let config: Config = toml::from_str(content)?;
        if config.display.welcome_text.trim().is_empty() {
            return Err(BmiError::Config(
                "display.welcome_text must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, BmiError> {
        toml::to_string_pretty(self).map_err(|e| BmiError::Config(e.to_string()))
    }

    pub fn empty() -> Self {
        Self {
            default_unit: UnitSystem::Metric,
            input_policy: InputPolicy::Lenient,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}
