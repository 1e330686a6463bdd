use std::fmt;

use wasm_bindgen::JsValue;

/// Result type for DOM-facing operations
pub type Result<T> = std::result::Result<T, HostError>;

/// Failures reaching the browser environment.
///
/// None of these are recoverable: callers log them and carry on as if the
/// operation were a no-op (server rendering, headless hosts).
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    NoWindow,
    NoDocument,
    NoBody,
    Dom(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NoWindow => write!(f, "No window available"),
            HostError::NoDocument => write!(f, "No document available"),
            HostError::NoBody => write!(f, "Document has no body"),
            HostError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Invalid navbar configuration supplied by the host page
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Invalid navbar config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
        }
    }
}
