//! Structured error types for merged-header.
//!
//! The geometry core never fails (invalid coordinates yield `None`); these
//! errors cover the fallible edges: loading header definitions and file I/O.

/// All errors that can occur while loading or reporting a header layout.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// Malformed JSON header definition.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Definition parsed but is structurally inconsistent.
    #[error("Invalid header definition: {0}")]
    InvalidDefinition(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeaderError>;

impl From<String> for HeaderError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for HeaderError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<HeaderError> for wasm_bindgen::JsValue {
    fn from(e: HeaderError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
