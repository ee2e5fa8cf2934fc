use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while attaching a [`TextField`](super::TextField) to markup.
#[derive(Debug, Error)]
pub enum MountError {
    /// A required element is missing from the markup.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A DOM call failed.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        Self::from_str(&err.to_string())
    }
}
