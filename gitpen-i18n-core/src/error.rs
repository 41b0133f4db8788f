//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum I18nError {
    /// Storage layer error (store unavailable, quota, permission...)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Locale code outside the supported set
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Translation catalog could not be parsed
    #[error("Catalog error: {locale} - {message}")]
    CatalogError { locale: String, message: String },

    /// Configuration file error
    #[error("Config error: {0}")]
    ConfigError(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(String),
}

impl I18nError {
    /// Whether it is expected behavior (user input, unsupported code, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidLocale(_) | Self::StorageError(_) => true,
            Self::SerializationError(_)
            | Self::CatalogError { .. }
            | Self::ConfigError(_)
            | Self::Io(_) => false,
        }
    }
}

impl From<std::io::Error> for I18nError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for I18nError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type I18nResult<T> = std::result::Result<T, I18nError>;
