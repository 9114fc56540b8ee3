use thiserror::Error;

#[derive(Debug, Error)]
pub enum BmiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Unknown unit system: {0}")]
    UnknownUnit(String),
}
