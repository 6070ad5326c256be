//! Copy-to-clipboard for Dioxus web apps
//!
//! Tries an ordered list of copy methods (async clipboard write, hidden
//! selection plus `execCommand("copy")`) and exposes the status of the latest
//! attempt for UI binding.

pub mod clipboard;
pub mod components;
pub mod hooks;

pub use clipboard::{
    ChangeStatus, ClipboardError, CopyController, CopyMethod, CopyState, CopyTarget,
    CopyTextOptions,
};
pub use hooks::{use_copy_text, UseCopyText};
