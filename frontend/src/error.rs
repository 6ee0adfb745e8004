use showcase_shared::SetupError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl FrontendError {
    pub fn from_js(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
