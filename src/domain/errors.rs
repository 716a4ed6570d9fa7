use derive_more::Display;

/// Root error for the panel. Kept flat: the page has few failure modes.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum PanelError {
    #[display(fmt = "Malformed payload: {}", _0)]
    MalformedPayload(String),
    #[display(fmt = "Not authorized")]
    Unauthorized,
    #[display(fmt = "Network Error: {}", _0)]
    Network(NetworkError),
    #[display(fmt = "Browser API Error: {}", _0)]
    BrowserApi(String),
    #[display(fmt = "Configuration Error: {}", _0)]
    Configuration(String),
}

/// Failures talking to the prediction gateway
#[derive(Debug, Clone, PartialEq, Display)]
pub enum NetworkError {
    #[display(fmt = "request failed: {}", _0)]
    RequestFailed(String),
    #[display(fmt = "HTTP {} ({})", status, status_text)]
    HttpStatus { status: u16, status_text: String },
    #[display(fmt = "serialization failed: {}", _0)]
    Serialization(String),
}

impl std::error::Error for PanelError {}
impl std::error::Error for NetworkError {}

impl From<NetworkError> for PanelError {
    fn from(error: NetworkError) -> Self {
        PanelError::Network(error)
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(error: serde_json::Error) -> Self {
        PanelError::MalformedPayload(error.to_string())
    }
}

impl From<PanelError> for wasm_bindgen::JsValue {
    fn from(error: PanelError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type PanelResult<T> = Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_display() {
        let err = PanelError::from(NetworkError::HttpStatus {
            status: 502,
            status_text: "Bad Gateway".to_string(),
        });
        assert_eq!(err.to_string(), "Network Error: HTTP 502 (Bad Gateway)");
    }

    #[test]
    fn json_errors_become_malformed_payload() {
        let err: PanelError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, PanelError::MalformedPayload(_)));
    }
}
