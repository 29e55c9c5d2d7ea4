//! `[slides]` section configuration.

use serde::Deserialize;

use super::check_attr_value;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlidesConfig {
    /// Literal marker separating two slides.
    pub marker: String,
    /// Class attribute of every `<section>` wrapper.
    pub class: String,
}

impl SlidesConfig {
    pub const MARKER: FieldPath = FieldPath::new("slides.marker");
    pub const CLASS: FieldPath = FieldPath::new("slides.class");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.marker.is_empty() {
            diag.error_with_hint(
                Self::MARKER,
                "slide marker must not be empty",
                "use the default `<hr>`",
            );
        }
        check_attr_value(&self.class, Self::CLASS, diag);
    }

    /// Opening tag of a slide wrapper, e.g. `<section class="slide">`.
    pub fn open_tag(&self) -> String {
        format!("<section class=\"{}\">", self.class)
    }
}

impl Default for SlidesConfig {
    fn default() -> Self {
        Self {
            marker: "<hr>".to_string(),
            class: "slide".to_string(),
        }
    }
}
