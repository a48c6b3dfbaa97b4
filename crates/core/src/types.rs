//! Domain types for articles and their paginated slide output.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A magazine article as supplied by the persistence layer.
///
/// Read-only input from the paginator's perspective; field names follow the
/// camelCase wire form of the stored records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable article identifier.
    pub id: String,

    /// Article title, shown on the cover slide.
    pub title: String,

    /// Optional subtitle, shown under the title on the cover slide.
    #[serde(default)]
    pub subtitle: Option<String>,

    /// Short teaser shown in listings.
    #[serde(default)]
    pub teaser: String,

    /// Markdown-flavored body text.
    #[serde(default)]
    pub content: String,

    /// Category slug this article belongs to.
    pub category: String,

    /// Publication date (as stored; not interpreted here).
    #[serde(default)]
    pub date: String,

    /// Estimated reading time in minutes.
    #[serde(default)]
    pub reading_time: u32,

    /// Author display name.
    #[serde(default)]
    pub author: String,

    /// Optional cover image reference.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Optional layout hint for the article page.
    #[serde(default)]
    pub layout: Option<Layout>,

    /// Optional dossier/topic this article is curated into.
    #[serde(default)]
    pub topic: Option<String>,
}

impl Article {
    /// Deserialize an article record from raw JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| Error::InvalidArticle(e.to_string()))
    }
}

/// Layout hint for the article's own page. Not used by pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Wide,
    Narrow,
    Full,
}

/// Target export format for the generated slide images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// 1080x1080 square post.
    Square,
    /// 1080x1350 (4:5) portrait post.
    Portrait,
}

impl ExportFormat {
    /// Parse a format from its name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "square" => Some(Self::Square),
            "portrait" => Some(Self::Portrait),
            _ => None,
        }
    }

    /// Like [`ExportFormat::from_name`], but with a typed error for the
    /// CLI and WASM boundaries.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| Error::UnknownFormat(name.to_string()))
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Portrait => "portrait",
        }
    }

    /// Soft character budget per content page.
    ///
    /// Portrait pages are taller and hold more text than square ones.
    pub fn capacity(&self) -> usize {
        match self {
            Self::Square => 350,
            Self::Portrait => 600,
        }
    }

    /// Output pixel dimensions (width, height) for the rendering layer.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Square => (1080, 1080),
            Self::Portrait => (1080, 1350),
        }
    }
}

/// The kind of a classified content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Header,
    Quote,
    List,
    Paragraph,
}

/// A classified span of source text within a content page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// How this block should be rendered.
    pub kind: BlockKind,

    /// Cleaned text content; for lists, newline-joined items.
    pub content: String,
}

impl Block {
    /// Create a new block.
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Length of the content in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the block carries no text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// One exportable slide page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Stable key: `"cover"` for the first page, else `"page-N"`.
    pub id: String,

    /// The page's content.
    #[serde(flatten)]
    pub body: PageBody,
}

/// Cover or content body of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageBody {
    /// The mandatory first page, built from the article's own metadata.
    Cover {
        title: String,
        subtitle: Option<String>,
        image: Option<String>,
    },
    /// A page of classified body blocks, in source order.
    Content { blocks: Vec<Block> },
}

impl Page {
    /// Build the cover page for an article.
    pub fn cover(article: &Article) -> Self {
        Self {
            id: "cover".to_string(),
            body: PageBody::Cover {
                title: article.title.clone(),
                subtitle: article.subtitle.clone(),
                image: article.image_url.clone(),
            },
        }
    }

    /// Build a content page with a 1-based positional tag.
    pub fn content(number: usize, blocks: Vec<Block>) -> Self {
        Self {
            id: format!("page-{}", number),
            body: PageBody::Content { blocks },
        }
    }

    /// Whether this is the cover page.
    pub fn is_cover(&self) -> bool {
        matches!(self.body, PageBody::Cover { .. })
    }

    /// The page's blocks; empty for the cover.
    pub fn blocks(&self) -> &[Block] {
        match &self.body {
            PageBody::Cover { .. } => &[],
            PageBody::Content { blocks } => blocks,
        }
    }
}

/// An article paginated into exportable slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDeck {
    /// Format the deck was paginated for.
    pub format: ExportFormat,

    /// Cover page followed by zero or more content pages.
    pub pages: Vec<Page>,
}

impl SlideDeck {
    /// Create an empty deck for the given format.
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            pages: Vec::new(),
        }
    }

    /// Append a page to the deck.
    pub fn push_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Total number of pages, cover included.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Content pages only, in order.
    pub fn content_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|p| !p.is_cover())
    }

    /// All blocks across all content pages, flattened in order.
    pub fn all_blocks(&self) -> Vec<&Block> {
        self.pages.iter().flat_map(|p| p.blocks().iter()).collect()
    }
}
