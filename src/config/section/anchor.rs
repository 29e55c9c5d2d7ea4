//! `[anchor]` section configuration.

use serde::Deserialize;

use super::check_attr_value;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Misspelled referrer token kept for compatibility with existing decks.
const MISSPELLED_NOREFERRER: &str = "noreferer";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnchorConfig {
    /// Value of the injected `target` attribute. Empty omits it.
    pub target: String,
    /// Tokens of the injected `rel` attribute. Empty omits it.
    pub rel: Vec<String>,
}

impl AnchorConfig {
    pub const TARGET: FieldPath = FieldPath::new("anchor.target");
    pub const REL: FieldPath = FieldPath::new("anchor.rel");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_attr_value(&self.target, Self::TARGET, diag);

        for token in &self.rel {
            if token.is_empty() || token.contains(char::is_whitespace) {
                diag.error_with_hint(
                    Self::REL,
                    format!("invalid rel token '{token}'"),
                    "list each token separately, e.g. [\"noopener\", \"noreferrer\"]",
                );
                continue;
            }
            check_attr_value(token, Self::REL, diag);
            if token == MISSPELLED_NOREFERRER {
                diag.warn(
                    Self::REL,
                    format!("rel token '{MISSPELLED_NOREFERRER}' is not recognized by browsers"),
                    "use \"noreferrer\" to suppress the Referer header",
                );
            }
        }
    }

    /// Attribute text inserted after `<a`, e.g. `target="_blank" rel="noopener"`.
    ///
    /// Returns an empty string when neither attribute is configured.
    pub fn attributes(&self) -> String {
        let mut attrs = Vec::with_capacity(2);
        if !self.target.is_empty() {
            attrs.push(format!("target=\"{}\"", self.target));
        }
        if !self.rel.is_empty() {
            attrs.push(format!("rel=\"{}\"", self.rel.join(" ")));
        }
        attrs.join(" ")
    }
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            target: "_blank".to_string(),
            rel: vec!["noopener".to_string(), MISSPELLED_NOREFERRER.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.anchor.target, "_blank");
        assert_eq!(config.anchor.rel, ["noopener", "noreferer"]);
        assert_eq!(
            config.anchor.attributes(),
            "target=\"_blank\" rel=\"noopener noreferer\""
        );
    }

    #[test]
    fn test_default_warns_on_misspelling() {
        let mut diag = ConfigDiagnostics::new();
        AnchorConfig::default().validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field, AnchorConfig::REL);
    }

    #[test]
    fn test_corrected_spelling() {
        let config = test_parse_config("[anchor]\nrel = [\"noopener\", \"noreferrer\"]");
        let mut diag = ConfigDiagnostics::new();
        config.anchor.validate(&mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
        assert_eq!(
            config.anchor.attributes(),
            "target=\"_blank\" rel=\"noopener noreferrer\""
        );
    }

    #[test]
    fn test_attributes_omit_empty() {
        let anchor = AnchorConfig {
            target: String::new(),
            rel: vec!["nofollow".to_string()],
        };
        assert_eq!(anchor.attributes(), "rel=\"nofollow\"");

        let anchor = AnchorConfig {
            target: "_top".to_string(),
            rel: Vec::new(),
        };
        assert_eq!(anchor.attributes(), "target=\"_top\"");

        let anchor = AnchorConfig {
            target: String::new(),
            rel: Vec::new(),
        };
        assert_eq!(anchor.attributes(), "");
    }

    #[test]
    fn test_invalid_rel_tokens() {
        let anchor = AnchorConfig {
            target: "_blank".to_string(),
            rel: vec![
                "noopener noreferrer".to_string(),
                String::new(),
                "x\"y".to_string(),
            ],
        };
        let mut diag = ConfigDiagnostics::new();
        anchor.validate(&mut diag);
        assert_eq!(diag.errors().len(), 3);
        assert!(diag.errors().iter().all(|e| e.field == AnchorConfig::REL));
    }

    #[test]
    fn test_invalid_target() {
        let anchor = AnchorConfig {
            target: "<_blank>".to_string(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        anchor.validate(&mut diag);
        assert!(diag.errors().iter().any(|e| e.field == AnchorConfig::TARGET));
    }
}
