//! Copy payloads
//!
//! A target is either plain text or a rich value carrying both a plain-text
//! and an HTML representation of the same content.

use serde::{Deserialize, Serialize};

/// The payload requested for copying
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CopyTarget {
    /// Plain text, copied as `text/plain`
    Text(String),
    /// Rich content, copied as both `text/plain` and `text/html`
    Rich { text: String, html: String },
}

impl CopyTarget {
    /// Create a rich target from its text and HTML forms
    pub fn rich(text: impl Into<String>, html: impl Into<String>) -> Self {
        Self::Rich {
            text: text.into(),
            html: html.into(),
        }
    }

    /// Plain-text form, used by the legacy selection copy
    pub fn plain_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Rich { text, .. } => text,
        }
    }

    /// HTML form if this is a rich target
    pub fn html(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Rich { html, .. } => Some(html),
        }
    }
}

impl From<String> for CopyTarget {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CopyTarget {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
