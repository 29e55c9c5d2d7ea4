//! Link rewriting: force new-tab navigation on `<a href>` tags.
//!
//! Matches `<a`, one ECMAScript whitespace or line terminator, then `href`,
//! and rewrites it to `<a {attributes} href`. Anchors whose first attribute is not `href`
//! (e.g. `<a class="x" href>`) are left alone.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use crate::config::AnchorConfig;

/// ECMAScript `\s`: differs from Unicode `White_Space` by including U+FEFF
/// and excluding U+0085.
const JS_WHITESPACE: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("<a{JS_WHITESPACE}href")).expect("anchor pattern is valid")
});

/// Injects the configured attributes into every matching anchor tag.
#[derive(Debug, Clone)]
pub(crate) struct AnchorRewriter {
    /// Full replacement text, `None` when there is nothing to inject.
    replacement: Option<String>,
}

impl AnchorRewriter {
    pub fn new(config: &AnchorConfig) -> Self {
        let attributes = config.attributes();
        let replacement = (!attributes.is_empty()).then(|| format!("<a {attributes} href"));
        Self { replacement }
    }

    /// Rewrite all matching anchors in `input`.
    pub fn rewrite(&self, input: &str) -> String {
        match &self.replacement {
            Some(replacement) => ANCHOR_HREF
                .replace_all(input, NoExpand(replacement.as_str()))
                .into_owned(),
            None => input.to_string(),
        }
    }
}

impl Default for AnchorRewriter {
    fn default() -> Self {
        Self::new(&AnchorConfig::default())
    }
}
