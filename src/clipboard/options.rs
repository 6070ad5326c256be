//! Caller configuration for a copy surface

use serde::{Deserialize, Serialize};

use super::method::CopyMethod;
use super::target::CopyTarget;

/// Snapshot of caller intent
///
/// `disabled` only suppresses the auto-trigger; explicit copies still run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyTextOptions {
    pub target: Option<CopyTarget>,
    pub auto: bool,
    pub methods: Vec<CopyMethod>,
    pub disabled: bool,
}

impl Default for CopyTextOptions {
    fn default() -> Self {
        Self {
            target: None,
            auto: false,
            methods: CopyMethod::defaults(),
            disabled: false,
        }
    }
}

impl CopyTextOptions {
    pub fn new(target: impl Into<CopyTarget>) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::default()
        }
    }

    pub fn auto(mut self, auto: bool) -> Self {
        self.auto = auto;
        self
    }

    pub fn methods(mut self, methods: Vec<CopyMethod>) -> Self {
        self.methods = methods;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The target to copy automatically, if auto-copy applies right now
    pub fn auto_target(&self) -> Option<&CopyTarget> {
        if !self.auto || self.disabled {
            return None;
        }
        self.target.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CopyTextOptions::default();
        assert!(!options.auto);
        assert!(!options.disabled);
        assert_eq!(options.methods, vec![CopyMethod::Clipboard]);
        assert!(options.target.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: CopyTextOptions =
            serde_json::from_str(r#"{"target": "npub1xyz", "auto": true}"#).unwrap();
        assert_eq!(options.target, Some(CopyTarget::from("npub1xyz")));
        assert!(options.auto);
        assert_eq!(options.methods, CopyMethod::defaults());
    }

    #[test]
    fn test_method_order_is_kept() {
        let options: CopyTextOptions =
            serde_json::from_str(r#"{"methods": ["execCommand", "clipboard"]}"#).unwrap();
        assert_eq!(
            options.methods,
            vec![CopyMethod::ExecCommand, CopyMethod::Clipboard]
        );
    }

    #[test]
    fn test_unknown_method_rejected() {
        let result = serde_json::from_str::<CopyTextOptions>(r#"{"methods": ["paste"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_auto_target() {
        let options = CopyTextOptions::new("text").auto(true);
        assert_eq!(options.auto_target(), Some(&CopyTarget::from("text")));

        // Disabled suppresses only the auto path
        assert!(options.clone().disabled(true).auto_target().is_none());
        assert!(CopyTextOptions::new("text").auto_target().is_none());
        assert!(CopyTextOptions::default().auto(true).auto_target().is_none());
    }
}
