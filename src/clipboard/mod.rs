//! Clipboard copy core
//!
//! Ordered copy strategies (async clipboard write, hidden selection plus
//! `execCommand("copy")`) behind a controller that tracks the status of the
//! latest attempt. Platform access goes through [`ClipboardPlatform`];
//! [`WebPlatform`] is the browser implementation.

pub mod blob;
pub mod controller;
pub mod errors;
pub mod interrupt;
pub mod method;
pub mod options;
pub mod platform;
pub mod status;
pub mod strategy;
pub mod target;
pub mod web;

pub use blob::{BlobPart, ClipboardPayload};
pub use controller::CopyController;
pub use errors::{ClipboardError, ClipboardResult};
pub use interrupt::interrupt;
pub use method::CopyMethod;
pub use options::CopyTextOptions;
pub use platform::{ClipboardPlatform, SelectionGuard};
pub use status::{ChangeStatus, CopyEvent, CopyState};
pub use target::CopyTarget;
pub use web::WebPlatform;
