//! Configuration section definitions.
//!
//! Each module corresponds to a section in `slides.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `slides` | `[slides]`   | Split marker and section class           |
//! | `anchor` | `[anchor]`   | Attributes injected into `<a href>` tags |

mod anchor;
mod slides;

pub use anchor::AnchorConfig;
pub use slides::SlidesConfig;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Characters that would break out of a double-quoted attribute value.
const FORBIDDEN_ATTR_CHARS: [char; 3] = ['"', '<', '>'];

/// Report an error if `value` cannot sit inside a double-quoted attribute.
fn check_attr_value(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if value.contains(FORBIDDEN_ATTR_CHARS) {
        diag.error_with_hint(
            field,
            format!("value '{value}' cannot be used inside an HTML attribute"),
            "remove `\"`, `<` and `>` characters",
        );
    }
}
