//! Clipboard error types
//!
//! Only a missing capability is classified. Every other platform failure
//! (permission denial, transient I/O) is folded into `Platform` with the
//! original message kept for display.

use std::fmt;
use wasm_bindgen::JsValue;

/// Clipboard copy error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The environment lacks the capability a strategy needs
    UnsupportedEnvironment(String),
    /// Any other failure reported by the platform
    Platform(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedEnvironment(msg) => write!(f, "Browser not supported: {}", msg),
            Self::Platform(msg) => write!(f, "Clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Result type alias for clipboard operations
pub type ClipboardResult<T> = Result<T, ClipboardError>;

impl ClipboardError {
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedEnvironment(msg.into())
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }

    /// Check if this error is a missing capability
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedEnvironment(_))
    }

    /// Fold a JavaScript exception into a platform error
    ///
    /// Uses the `message` property when the value is an `Error`, otherwise
    /// the string form, falling back to the debug representation.
    pub fn from_js(value: JsValue) -> Self {
        let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Platform(message)
    }
}

impl From<JsValue> for ClipboardError {
    fn from(value: JsValue) -> Self {
        Self::from_js(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_classification() {
        let err = ClipboardError::unsupported("ClipboardItem missing");
        assert!(err.is_unsupported());
        assert!(!ClipboardError::platform("denied").is_unsupported());
    }

    #[test]
    fn test_display_preserves_message() {
        let err = ClipboardError::platform("Write permission denied");
        assert_eq!(err.to_string(), "Clipboard error: Write permission denied");

        let err = ClipboardError::unsupported("copy command rejected");
        assert!(err.to_string().contains("copy command rejected"));
    }
}
