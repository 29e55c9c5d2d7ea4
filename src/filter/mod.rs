//! Template text filters.
//!
//! # Modules
//!
//! - `slides`: splits on the slide marker and wraps each slide in `<section>`
//! - `anchor`: injects `target`/`rel` into `<a href>` tags
//!
//! Only the composed [`SlidesFilter`] is a host-visible [`Filter`]; the two
//! steps are internal.

mod anchor;
mod slides;

use thiserror::Error;

use crate::config::{ConfigError, FilterConfig};
use anchor::AnchorRewriter;
use slides::SlideWrapper;

// =============================================================================
// Filter trait
// =============================================================================

/// A named, pure string transformation callable from templates.
pub trait Filter: Send + Sync {
    /// Name used by templates to invoke this filter.
    fn name(&self) -> &str;

    /// Transform `input`. Total over all strings.
    fn apply(&self, input: &str) -> String;
}

/// Errors raised at the template host boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter `{0}`")]
    Unknown(String),

    #[error("filter `{filter}` expects a string, found {found}")]
    NotAString { filter: String, found: &'static str },
}

// =============================================================================
// Slides filter
// =============================================================================

/// `slides`: wrap slides first, then rewrite links in the wrapped output.
#[derive(Debug, Clone, Default)]
pub struct SlidesFilter {
    wrapper: SlideWrapper,
    anchors: AnchorRewriter,
}

impl SlidesFilter {
    pub const NAME: &'static str = "slides";

    /// Build the filter from `config`, rejecting configs that fail validation.
    ///
    /// Warnings (such as the `noreferer` token) do not prevent construction.
    pub fn new(config: &FilterConfig) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::Diagnostics)?;
        Ok(Self {
            wrapper: SlideWrapper::new(&config.slides),
            anchors: AnchorRewriter::new(&config.anchor),
        })
    }
}

impl Filter for SlidesFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, input: &str) -> String {
        self.anchors.rewrite(&self.wrapper.wrap(input))
    }
}
