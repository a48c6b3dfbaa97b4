//! Category label resolution.
//!
//! Labels come from an ordered chain: the dynamic category records, then the
//! static legacy table, then a default derived from the slug itself. The
//! result is tagged with the stage that matched.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A category record as persisted by the backing store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier.
    pub id: String,

    /// URL slug; articles reference categories by this.
    pub slug: String,

    /// Display label (or translation key).
    pub label: String,

    /// Whether the category is hidden from listings. Hidden categories
    /// still resolve: visibility is a listing concern, not a labeling one.
    #[serde(default)]
    pub is_hidden: bool,
}

/// A resolved category label, tagged with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLabel {
    /// Matched a dynamic category record.
    Dynamic(String),
    /// Matched the static legacy table.
    Static(String),
    /// No match anywhere; derived from the slug.
    Derived(String),
}

impl ResolvedLabel {
    /// The label text, regardless of origin.
    pub fn label(&self) -> &str {
        match self {
            Self::Dynamic(s) | Self::Static(s) | Self::Derived(s) => s,
        }
    }

    /// Whether the label had to be derived from the slug.
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Derived(_))
    }
}

/// Resolve a category slug to its display label.
///
/// Tries the dynamic records first, then the static table, and finally
/// derives a default by uppercasing the slug's first character.
pub fn resolve_label(
    slug: &str,
    dynamic: &[Category],
    static_table: &HashMap<String, String>,
) -> ResolvedLabel {
    if let Some(category) = dynamic.iter().find(|c| c.slug == slug) {
        return ResolvedLabel::Dynamic(category.label.clone());
    }

    if let Some(label) = static_table.get(slug) {
        return ResolvedLabel::Static(label.clone());
    }

    ResolvedLabel::Derived(capitalize(slug))
}

/// Uppercase the first character of a slug.
fn capitalize(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
