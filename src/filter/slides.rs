//! Slide wrapping: split on a marker, wrap each piece in a `<section>`.

use crate::config::SlidesConfig;

const CLOSE_TAG: &str = "</section>";

/// Wraps every marker-delimited segment of its input in a slide section.
#[derive(Debug, Clone)]
pub(crate) struct SlideWrapper {
    marker: String,
    open_tag: String,
}

impl SlideWrapper {
    pub fn new(config: &SlidesConfig) -> Self {
        Self {
            marker: config.marker.clone(),
            open_tag: config.open_tag(),
        }
    }

    /// Split `input` on the marker and wrap each segment, in order.
    ///
    /// Empty segments are kept, so `""` yields one empty section and a
    /// trailing marker yields a trailing empty section.
    pub fn wrap(&self, input: &str) -> String {
        let segments = input.split(self.marker.as_str());
        let mut out = String::with_capacity(input.len() + self.open_tag.len() + CLOSE_TAG.len());
        for segment in segments {
            out.push_str(&self.open_tag);
            out.push_str(segment);
            out.push_str(CLOSE_TAG);
        }
        out
    }
}

impl Default for SlideWrapper {
    fn default() -> Self {
        Self::new(&SlidesConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(input: &str) -> String {
        SlideWrapper::default().wrap(input)
    }

    #[test]
    fn test_two_slides() {
        assert_eq!(
            wrap("a<hr>b"),
            "<section class=\"slide\">a</section><section class=\"slide\">b</section>"
        );
    }

    #[test]
    fn test_no_marker_single_section() {
        assert_eq!(
            wrap("just <p>one</p> slide"),
            "<section class=\"slide\">just <p>one</p> slide</section>"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(wrap(""), "<section class=\"slide\"></section>");
    }

    #[test]
    fn test_empty_segments_preserved() {
        assert_eq!(
            wrap("<hr>x<hr><hr>"),
            concat!(
                "<section class=\"slide\"></section>",
                "<section class=\"slide\">x</section>",
                "<section class=\"slide\"></section>",
                "<section class=\"slide\"></section>",
            )
        );
    }

    #[test]
    fn test_marker_is_literal() {
        // Self-closing and uppercase variants are not the marker.
        let out = wrap("a<hr/>b<HR>c");
        assert_eq!(out, "<section class=\"slide\">a<hr/>b<HR>c</section>");
    }

    #[test]
    fn test_custom_config() {
        let wrapper = SlideWrapper::new(&SlidesConfig {
            marker: "---".to_string(),
            class: "page".to_string(),
        });
        assert_eq!(
            wrapper.wrap("one---two"),
            "<section class=\"page\">one</section><section class=\"page\">two</section>"
        );
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(
            wrap("héllo<hr>世界"),
            "<section class=\"slide\">héllo</section><section class=\"slide\">世界</section>"
        );
    }
}
