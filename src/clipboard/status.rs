//! Copy attempt lifecycle state
//!
//! The unset state is modelled as `Option::None` on [`CopyState::status`],
//! so a fresh controller or one whose target just changed reports no status
//! at all.

use serde::{Deserialize, Serialize};

use super::errors::ClipboardError;

/// Lifecycle of the most recent copy attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    /// A strategy is currently running
    Loading,
    /// A strategy copied the target
    Done,
    /// The latest strategy failed
    Error,
}

/// Event emitted by a strategy attempt
///
/// Strategies never touch [`CopyState`] directly; the controller applies
/// these in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum CopyEvent {
    Started,
    Succeeded,
    Failed(ClipboardError),
}

/// Status and error, always updated together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyState {
    pub status: Option<ChangeStatus>,
    pub error: Option<ClipboardError>,
}

impl CopyState {
    /// Apply a strategy event
    pub fn apply(&mut self, event: CopyEvent) {
        match event {
            CopyEvent::Started => {
                self.status = Some(ChangeStatus::Loading);
                self.error = None;
            }
            CopyEvent::Succeeded => {
                self.status = Some(ChangeStatus::Done);
                self.error = None;
            }
            CopyEvent::Failed(err) => {
                self.status = Some(ChangeStatus::Error);
                self.error = Some(err);
            }
        }
    }

    /// Back to the unset state
    pub fn clear(&mut self) {
        self.status = None;
        self.error = None;
    }

    pub fn is_unset(&self) -> bool {
        self.status.is_none()
    }

    pub fn is_loading(&self) -> bool {
        self.status == Some(ChangeStatus::Loading)
    }

    pub fn is_done(&self) -> bool {
        self.status == Some(ChangeStatus::Done)
    }

    pub fn is_error(&self) -> bool {
        self.status == Some(ChangeStatus::Error)
    }

    /// Returns the error message if in error state, None otherwise
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}
