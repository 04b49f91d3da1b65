//! Client Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no browser window available")]
    NoWindow,
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("invalid client config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        ClientError::Network(detail)
    }
}

impl From<serde_wasm_bindgen::Error> for ClientError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}
