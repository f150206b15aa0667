use lightbox_common::ConfigError;
use thiserror::Error;
use wasm_bindgen_x::JsValue;

/// Errors from wiring the viewer into the page
#[derive(Error, Debug)]
pub enum LightboxError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM error: {0}")]
    Dom(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for LightboxError {
    fn from(value: JsValue) -> Self {
        LightboxError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
