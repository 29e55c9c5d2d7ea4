//! Filter configuration management for `slides.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [slides] and [anchor]
//! ├── error          # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # FilterConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                       |
//! |------------|-----------------------------------------------|
//! | `[slides]` | Split marker and wrapper class                |
//! | `[anchor]` | `target`/`rel` attributes added to links      |
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock `slides` filter behaviour.

mod error;
pub mod section;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use section::{AnchorConfig, SlidesConfig};

use crate::{debug, log};
use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing slides.toml
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FilterConfig {
    /// Slide wrapping settings
    #[serde(default)]
    pub slides: SlidesConfig,

    /// Link rewriting settings
    #[serde(default)]
    pub anchor: AnchorConfig,
}

impl FilterConfig {
    /// Load, validate and return configuration from a TOML file.
    ///
    /// Unknown fields and warnings are logged, not fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let diag = config.validate().map_err(ConfigError::Diagnostics)?;
        diag.print_warnings();

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate every section.
    ///
    /// On success, returns the diagnostics so callers can report warnings.
    pub fn validate(&self) -> Result<ConfigDiagnostics, ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        self.slides.validate(&mut diag);
        self.anchor.validate(&mut diag);
        diag.into_result()
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }
}

#[cfg(test)]
pub fn test_parse_config(extra: &str) -> FilterConfig {
    let (parsed, ignored) = FilterConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
