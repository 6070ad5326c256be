//! Platform capabilities consumed by the copy strategies
//!
//! The browser clipboard and document are injected through
//! [`ClipboardPlatform`] instead of being read from globals, so the
//! strategies and the controller can run against a fake in tests.

use async_trait::async_trait;

use super::blob::ClipboardPayload;
use super::errors::ClipboardResult;

#[async_trait(?Send)]
pub trait ClipboardPlatform {
    /// True only when both the clipboard-item constructor and the async
    /// clipboard write entry point exist. Never fails.
    async fn supports_modern_write(&self) -> bool;

    /// Submit one clipboard item through the async clipboard write
    async fn write(&self, payload: &ClipboardPayload) -> ClipboardResult<()>;

    /// Stage `text` in a hidden, focused, fully selected text field
    fn select_text(&self, text: &str) -> ClipboardResult<SelectionGuard>;

    /// Run the document copy command against the current selection
    fn exec_copy(&self) -> ClipboardResult<bool>;
}

/// Removes a staged selection node
///
/// The cleanup runs exactly once: on [`SelectionGuard::cancel`] or when the
/// guard is dropped, whichever comes first.
pub struct SelectionGuard {
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl SelectionGuard {
    pub fn new(cleanup: impl FnOnce() + 'static) -> Self {
        Self {
            cleanup: Some(Box::new(cleanup)),
        }
    }

    /// Detach and remove the staged node now
    pub fn cancel(mut self) {
        self.run_cleanup();
    }

    fn run_cleanup(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl Drop for SelectionGuard {
    fn drop(&mut self) {
        self.run_cleanup();
    }
}

impl std::fmt::Debug for SelectionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionGuard")
            .field("pending", &self.cleanup.is_some())
            .finish()
    }
}
