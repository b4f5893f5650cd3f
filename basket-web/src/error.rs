use crate::dom::js_error_message;
use wasm_bindgen::JsValue;

/// Failures raised while talking to the browser.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("{0} is unavailable")]
    Missing(&'static str),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Conversion error: {0}")]
    Convert(#[from] serde_wasm_bindgen::Error),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_global_names_the_global() {
        assert_eq!(
            WebError::Missing("Stripe.js").to_string(),
            "Stripe.js is unavailable"
        );
    }

    #[test]
    fn json_errors_convert() {
        let err: WebError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON parsing error"));
    }
}
