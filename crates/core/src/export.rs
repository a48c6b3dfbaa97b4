//! Export-session driver.
//!
//! Owns the current-page state for one article's slide export: which page is
//! selected, which format is active, and the deck computed for them. The
//! actual rasterization of a page into an image is the rendering
//! collaborator's job; this type only hands it the right page and filename.

use crate::normalize::slugify;
use crate::paginate::Paginator;
use crate::types::{Article, ExportFormat, Page, SlideDeck};

/// Navigation and rebuild state for exporting one article's slides.
#[derive(Debug, Clone)]
pub struct ExportSession {
    article: Article,
    format: ExportFormat,
    deck: SlideDeck,
    current: usize,
}

impl ExportSession {
    /// Start a session for an article in the given format, positioned on
    /// the cover page.
    pub fn new(article: Article, format: ExportFormat) -> Self {
        let deck = Paginator::new(format).paginate(&article);
        Self {
            article,
            format,
            deck,
            current: 0,
        }
    }

    /// The active format.
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// The computed deck.
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// Total page count, cover included. Always at least 1.
    pub fn page_count(&self) -> usize {
        self.deck.page_count()
    }

    /// Zero-based index of the selected page.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The selected page.
    pub fn current_page(&self) -> &Page {
        &self.deck.pages[self.current]
    }

    /// Move to the next page, stopping at the last one.
    pub fn next(&mut self) -> &Page {
        if self.current + 1 < self.deck.page_count() {
            self.current += 1;
        }
        self.current_page()
    }

    /// Move to the previous page, stopping at the cover.
    pub fn previous(&mut self) -> &Page {
        self.current = self.current.saturating_sub(1);
        self.current_page()
    }

    /// Switch formats and re-paginate.
    pub fn set_format(&mut self, format: ExportFormat) {
        self.format = format;
        self.rebuild();
    }

    /// Replace the article and re-paginate.
    pub fn set_article(&mut self, article: Article) {
        self.article = article;
        self.rebuild();
    }

    /// Deterministic filename for the selected page's exported image:
    /// slugified title plus the 1-based page number.
    pub fn export_filename(&self) -> String {
        format!(
            "{}-page-{}.png",
            slugify(&self.article.title),
            self.current + 1
        )
    }

    /// Recompute the deck, resetting the index when it no longer points at
    /// a page.
    fn rebuild(&mut self) {
        self.deck = Paginator::new(self.format).paginate(&self.article);
        if self.current >= self.deck.page_count() {
            self.current = 0;
        }
    }
}
