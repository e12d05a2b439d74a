//! Error types for Vanguard

use thiserror::Error;

/// The main error type for Vanguard operations
#[derive(Debug, Error)]
pub enum VanguardError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid enum value: {value} is not one of {allowed:?}")]
    InvalidEnumValue {
        value: String,
        allowed: Vec<String>,
    },

    #[error("Asset error: {0}")]
    AssetError(String),

    #[error("Invalid phase transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}

/// Result type alias for Vanguard operations
pub type Result<T> = std::result::Result<T, VanguardError>;

impl From<toml::de::Error> for VanguardError {
    fn from(err: toml::de::Error) -> Self {
        VanguardError::TomlParseError(err.to_string())
    }
}
