//! Text normalization for article bodies.
//!
//! Handles line-ending unification, paragraph splitting, inline emphasis
//! stripping, and title slugification for export filenames.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Regex to split text on runs of two-or-more newlines (paragraph breaks).
static PARAGRAPH_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Regex for `**bold**` marker pairs.
///
/// Resolved before the single-asterisk pattern so `**x**` is not mis-read
/// as two italic markers.
static BOLD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Regex for `*italic*` marker pairs.
static ITALIC_STAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

/// Regex for `_italic_` marker pairs.
static ITALIC_UNDERSCORE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_]+)_").unwrap());

/// Split a raw article body into trimmed, non-empty paragraph candidates.
///
/// Line endings are unified to `\n` first, then the text is split on blank
/// lines. Empty and whitespace-only candidates are dropped. An empty body
/// yields an empty vec.
pub fn normalize_paragraphs(text: &str) -> Vec<String> {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    PARAGRAPH_BREAK_REGEX
        .split(&unified)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip inline emphasis markers from a text fragment.
///
/// Removes `**bold**`, `*italic*`, and `_italic_` marker pairs, in that
/// order. Everything else, including header, quote, and list markers, is
/// preserved exactly; those are the classifier's concern.
pub fn strip_emphasis(text: &str) -> String {
    let text = BOLD_REGEX.replace_all(text, "$1");
    let text = ITALIC_STAR_REGEX.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE_REGEX.replace_all(&text, "$1");
    text.into_owned()
}

/// Turn an article title into a filesystem- and URL-safe slug.
///
/// Decomposes to NFD and drops combining marks so accented characters fold
/// to their base letters, lowercases, and collapses every other character
/// run into a single `-`.
pub fn slugify(text: &str) -> String {
    let decomposed: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let mut slug = String::with_capacity(decomposed.len());
    let mut pending_dash = false;

    for c in decomposed.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
