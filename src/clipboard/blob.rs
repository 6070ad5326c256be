//! Payload encoding for the async clipboard write
//!
//! A target becomes one clipboard item with one binary part per MIME type.
//! Rich targets carry both `text/plain` and `text/html` so the consumer can
//! pick either representation.

use super::target::CopyTarget;

pub const MIME_TEXT_PLAIN: &str = "text/plain";
pub const MIME_TEXT_HTML: &str = "text/html";

/// One representation of the clipboard item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobPart {
    pub mime_type: &'static str,
    pub data: Vec<u8>,
}

/// A single clipboard item made of one or more typed parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub parts: Vec<BlobPart>,
}

impl ClipboardPayload {
    /// Encode a target into its clipboard representations
    pub fn encode(target: &CopyTarget) -> Self {
        let mut parts = vec![BlobPart {
            mime_type: MIME_TEXT_PLAIN,
            data: target.plain_text().as_bytes().to_vec(),
        }];

        if let Some(html) = target.html() {
            parts.push(BlobPart {
                mime_type: MIME_TEXT_HTML,
                data: html.as_bytes().to_vec(),
            });
        }

        Self { parts }
    }

    pub fn mime_types(&self) -> Vec<&'static str> {
        self.parts.iter().map(|p| p.mime_type).collect()
    }

    /// Data registered under the given MIME type
    pub fn get(&self, mime_type: &str) -> Option<&[u8]> {
        self.parts
            .iter()
            .find(|p| p.mime_type == mime_type)
            .map(|p| p.data.as_slice())
    }
}
