//! Block classification for normalized paragraph candidates.
//!
//! Each candidate becomes exactly one [`Block`]: header, quote, list, or
//! paragraph, with inline emphasis stripped from the stored content.

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::strip_emphasis;
use crate::types::{Block, BlockKind};

/// Regex for the leading `#`-run of a Markdown header.
static HEADER_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s*").unwrap());

/// Regex for the leading `>` of a quote.
static QUOTE_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s*").unwrap());

/// Regex for a bulleted list item marker (`-` or `*` plus whitespace).
static BULLET_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s+").unwrap());

/// Regex for a numbered list item marker (`1.` plus whitespace).
static NUMBERED_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// Classify one trimmed, non-empty paragraph candidate into a block.
///
/// Precedence: header (`#`), then quote (`>`), then list (bulleted or
/// numbered first line), then paragraph. Pure: the same input always yields
/// the same block.
pub fn classify_block(text: &str) -> Block {
    let trimmed = text.trim();

    if trimmed.starts_with('#') {
        let content = HEADER_PREFIX_REGEX.replace(trimmed, "");
        return Block::new(BlockKind::Header, strip_emphasis(&content));
    }

    if trimmed.starts_with('>') {
        let content = QUOTE_PREFIX_REGEX.replace(trimmed, "");
        return Block::new(BlockKind::Quote, strip_emphasis(&content));
    }

    if is_list_candidate(trimmed) {
        return Block::new(BlockKind::List, join_list_items(trimmed));
    }

    Block::new(BlockKind::Paragraph, strip_emphasis(trimmed))
}

/// A candidate is a list when its first physical line carries a bullet or
/// number marker.
fn is_list_candidate(text: &str) -> bool {
    let first_line = text.lines().next().unwrap_or("");
    BULLET_ITEM_REGEX.is_match(first_line) || NUMBERED_ITEM_REGEX.is_match(first_line)
}

/// Strip the item marker from one physical list line.
fn strip_item_marker(line: &str) -> String {
    if BULLET_ITEM_REGEX.is_match(line) {
        BULLET_ITEM_REGEX.replace(line, "").into_owned()
    } else if NUMBERED_ITEM_REGEX.is_match(line) {
        NUMBERED_ITEM_REGEX.replace(line, "").into_owned()
    } else {
        line.to_string()
    }
}

/// Join a list candidate's lines into newline-separated cleaned items.
///
/// Every physical line is one item; lines that end up empty after marker
/// stripping are dropped.
fn join_list_items(text: &str) -> String {
    text.lines()
        .map(|line| strip_emphasis(strip_item_marker(line.trim_start()).trim()))
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
