//! Markup removal.
//!
//! Rich-text editors hand us HTML. We do not parse it: every span that looks
//! like a tag (`<`, any run of non-`>` characters, `>`) is deleted in one
//! left-to-right pass. Nested or unbalanced brackets can leave residue, e.g.
//! `<<p>>hello` becomes `>hello`. Callers rely on exactly this output, so do
//! not swap in an HTML parser here.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Regex for a single tag-like span.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Remove every tag-like span from `document`, leaving the plain text.
///
/// Borrows the input when there is nothing to strip.
pub fn strip_tags(document: &str) -> Cow<'_, str> {
    TAG_PATTERN.replace_all(document, "")
}
