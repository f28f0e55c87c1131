use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window available")]
    MissingWindow,
    #[error("no document attached to the window")]
    MissingDocument,
    #[error("javascript call failed: {0}")]
    Js(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("chart drawing failed: {0}")]
    Chart(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        PageError::Js(message)
    }
}

pub type PageResult<T> = Result<T, PageError>;
