//! Slide and link filters for tola templates.
//!
//! The `slides` filter turns a rendered page body into a slide deck:
//!
//! 1. the body is split on `<hr>` and every piece is wrapped in
//!    `<section class="slide">…</section>`;
//! 2. every `<a href` in the result gains
//!    `target="_blank" rel="noopener noreferer"`.
//!
//! ```
//! let deck = tola_slides::slides("Intro<hr><a href=\"/next\">next</a>");
//! assert_eq!(
//!     deck,
//!     "<section class=\"slide\">Intro</section>\
//!      <section class=\"slide\"><a target=\"_blank\" rel=\"noopener noreferer\" href=\"/next\">next</a></section>"
//! );
//! ```
//!
//! Template hosts use [`FilterRegistry`], optionally built from a
//! `slides.toml` loaded with [`FilterConfig::load`].

pub mod config;
pub mod filter;
pub mod logger;
pub mod registry;

use std::sync::LazyLock;

pub use config::{ConfigError, FilterConfig};
pub use filter::{Filter, FilterError, SlidesFilter};
pub use registry::FilterRegistry;

static DEFAULT_SLIDES: LazyLock<SlidesFilter> = LazyLock::new(SlidesFilter::default);

/// Apply the `slides` filter with the default configuration.
#[inline]
pub fn slides(input: &str) -> String {
    DEFAULT_SLIDES.apply(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_default() {
        assert_eq!(
            slides("a<hr>b"),
            "<section class=\"slide\">a</section><section class=\"slide\">b</section>"
        );
        assert_eq!(slides(""), "<section class=\"slide\"></section>");
    }

    #[test]
    fn test_slides_matches_registry() {
        let registry = FilterRegistry::default();
        let input = "<h1>Title</h1><hr><p>See <a href=\"https://example.com\">this</a></p>";
        assert_eq!(slides(input), registry.apply("slides", input).unwrap());
    }

    #[test]
    fn test_slides_from_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|i| std::thread::spawn(move || slides(&format!("{i}<hr><a href=\"{i}\">"))))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let out = handle.join().unwrap();
            assert!(out.starts_with(&format!("<section class=\"slide\">{i}</section>")));
            assert!(out.contains(&format!("rel=\"noopener noreferer\" href=\"{i}\"")));
        }
    }
}
