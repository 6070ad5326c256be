//! Copy strategy identifiers
//!
//! The configured list is ordered: the first method is tried first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopyMethod {
    /// Async clipboard write with a typed clipboard item
    #[serde(rename = "clipboard")]
    Clipboard,
    /// Hidden text field selection plus the document copy command
    #[serde(rename = "execCommand")]
    ExecCommand,
}

impl CopyMethod {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Clipboard => "clipboard",
            Self::ExecCommand => "execCommand",
        }
    }

    /// Default method list used when the caller configures none
    pub fn defaults() -> Vec<CopyMethod> {
        vec![Self::Clipboard]
    }
}

impl fmt::Display for CopyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CopyMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clipboard" => Ok(Self::Clipboard),
            "execCommand" => Ok(Self::ExecCommand),
            other => Err(format!("Unknown copy method: {}", other)),
        }
    }
}
