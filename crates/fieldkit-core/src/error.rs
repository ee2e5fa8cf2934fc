//! Error types for fieldkit-core.

use thiserror::Error;

/// Errors raised while loading a [`TextFieldConfig`](crate::TextFieldConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value that cannot be honored.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}
