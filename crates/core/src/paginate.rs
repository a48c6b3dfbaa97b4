//! Greedy page accumulation of classified blocks under a capacity budget.
//!
//! The cover page always comes first, built straight from the article's
//! metadata. Body blocks are then assigned to content pages in a single
//! pass: a header forces a page break when the page already holds content,
//! and the capacity check runs after a block is added, so a single oversized
//! block still lands on its page (blocks are never split).

use crate::classify::classify_block;
use crate::normalize::normalize_paragraphs;
use crate::types::{Article, Block, BlockKind, ExportFormat, Page, SlideDeck};

/// Fixed size surcharge for header blocks.
///
/// Headers render much larger than their character count suggests.
pub const HEADER_SIZE_PENALTY: usize = 100;

/// Paginates articles into slide decks for one export format.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    format: ExportFormat,
}

impl Paginator {
    /// Create a paginator for the given format.
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    /// The format this paginator targets.
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Paginate an article into a cover page plus zero or more content
    /// pages.
    ///
    /// Deterministic and side-effect free: the deck is recomputed from
    /// scratch on every call.
    pub fn paginate(&self, article: &Article) -> SlideDeck {
        let capacity = self.format.capacity();

        let mut deck = SlideDeck::new(self.format);
        deck.push_page(Page::cover(article));

        let mut buffer: Vec<Block> = Vec::new();
        let mut page_number = 1;

        for candidate in normalize_paragraphs(&article.content) {
            let block = classify_block(&candidate);

            // A header never shares a page with preceding blocks.
            if block.kind == BlockKind::Header && !buffer.is_empty() {
                flush(&mut deck, &mut buffer, &mut page_number);
            }

            buffer.push(block);

            // Flush-after-add: the check runs once the block is in, so an
            // oversized block still lands here rather than being split.
            if buffer_size(&buffer) > capacity {
                flush(&mut deck, &mut buffer, &mut page_number);
            }
        }

        if !buffer.is_empty() {
            flush(&mut deck, &mut buffer, &mut page_number);
        }

        log::debug!(
            "paginated article '{}' into {} pages ({})",
            article.id,
            deck.page_count(),
            self.format.name()
        );

        deck
    }
}

/// Accumulated size of the buffered blocks.
fn buffer_size(blocks: &[Block]) -> usize {
    blocks.iter().map(block_size).sum()
}

/// Size of one block: content length plus the header surcharge.
fn block_size(block: &Block) -> usize {
    match block.kind {
        BlockKind::Header => block.len() + HEADER_SIZE_PENALTY,
        _ => block.len(),
    }
}

/// Move the buffered blocks onto a finished content page.
fn flush(deck: &mut SlideDeck, buffer: &mut Vec<Block>, page_number: &mut usize) {
    deck.push_page(Page::content(*page_number, std::mem::take(buffer)));
    *page_number += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageBody;

    fn article_with_body(body: &str) -> Article {
        Article {
            id: "test-article".to_string(),
            title: "Test Article".to_string(),
            subtitle: Some("A subtitle".to_string()),
            teaser: String::new(),
            content: body.to_string(),
            category: "philosophy".to_string(),
            date: "2024-01-15".to_string(),
            reading_time: 5,
            author: "The Editors".to_string(),
            image_url: None,
            layout: None,
            topic: None,
        }
    }

    fn kinds(page: &Page) -> Vec<BlockKind> {
        page.blocks().iter().map(|b| b.kind).collect()
    }

    #[test]
    fn test_cover_always_first() {
        let deck = Paginator::new(ExportFormat::Square).paginate(&article_with_body("Hello."));
        assert!(deck.pages[0].is_cover());
        assert_eq!(deck.pages[0].id, "cover");
        assert_eq!(deck.pages.iter().filter(|p| p.is_cover()).count(), 1);
    }

    #[test]
    fn test_cover_carries_article_metadata() {
        let mut article = article_with_body("");
        article.image_url = Some("https://example.com/c.jpg".to_string());
        let deck = Paginator::new(ExportFormat::Portrait).paginate(&article);

        match &deck.pages[0].body {
            PageBody::Cover {
                title,
                subtitle,
                image,
            } => {
                assert_eq!(title, "Test Article");
                assert_eq!(subtitle.as_deref(), Some("A subtitle"));
                assert_eq!(image.as_deref(), Some("https://example.com/c.jpg"));
            }
            PageBody::Content { .. } => panic!("first page must be the cover"),
        }
    }

    #[test]
    fn test_empty_body_yields_cover_only() {
        let deck = Paginator::new(ExportFormat::Square).paginate(&article_with_body(""));
        assert_eq!(deck.page_count(), 1);
        assert_eq!(deck.content_pages().count(), 0);
    }

    #[test]
    fn test_header_and_paragraph_share_a_small_page() {
        let deck = Paginator::new(ExportFormat::Square)
            .paginate(&article_with_body("# Intro\n\nHello world."));

        assert_eq!(deck.page_count(), 2);
        assert_eq!(deck.pages[1].id, "page-1");
        assert_eq!(
            kinds(&deck.pages[1]),
            vec![BlockKind::Header, BlockKind::Paragraph]
        );
        assert_eq!(deck.pages[1].blocks()[0].content, "Intro");
        assert_eq!(deck.pages[1].blocks()[1].content, "Hello world.");
    }

    #[test]
    fn test_header_after_content_forces_page_break() {
        let deck = Paginator::new(ExportFormat::Square)
            .paginate(&article_with_body("Paragraph one.\n\n# Section\n\nParagraph two."));

        assert_eq!(deck.page_count(), 3);
        assert_eq!(kinds(&deck.pages[1]), vec![BlockKind::Paragraph]);
        assert_eq!(
            kinds(&deck.pages[2]),
            vec![BlockKind::Header, BlockKind::Paragraph]
        );
    }

    #[test]
    fn test_quote_and_list_share_a_page() {
        let deck = Paginator::new(ExportFormat::Square)
            .paginate(&article_with_body("> A wise quote.\n\n- item one\n- item two"));

        assert_eq!(deck.page_count(), 2);
        let blocks = deck.pages[1].blocks();
        assert_eq!(blocks[0], Block::new(BlockKind::Quote, "A wise quote."));
        assert_eq!(blocks[1], Block::new(BlockKind::List, "item one\nitem two"));
    }

    #[test]
    fn test_flush_after_add_lets_a_page_overflow() {
        // 300 + 100 chars exceeds the square budget only after the second
        // block is added, so both stay on the same page.
        let body = format!("{}\n\n{}", "a".repeat(300), "b".repeat(100));
        let deck = Paginator::new(ExportFormat::Square).paginate(&article_with_body(&body));

        assert_eq!(deck.page_count(), 2);
        assert_eq!(deck.pages[1].blocks().len(), 2);
    }

    #[test]
    fn test_oversized_block_lands_alone() {
        let body = format!("{}\n\nAfterword.", "x".repeat(500));
        let deck = Paginator::new(ExportFormat::Square).paginate(&article_with_body(&body));

        assert_eq!(deck.page_count(), 3);
        assert_eq!(deck.pages[1].blocks().len(), 1);
        assert_eq!(deck.pages[1].blocks()[0].len(), 500);
        assert_eq!(deck.pages[2].blocks()[0].content, "Afterword.");
    }

    #[test]
    fn test_header_penalty_counts_against_capacity() {
        // 30 header chars + 100 penalty + 250 paragraph chars > 350, while
        // the raw character sum alone would fit.
        let body = format!("# {}\n\n{}\n\nTail.", "h".repeat(30), "p".repeat(250));
        let deck = Paginator::new(ExportFormat::Square).paginate(&article_with_body(&body));

        assert_eq!(deck.page_count(), 3);
        assert_eq!(
            kinds(&deck.pages[1]),
            vec![BlockKind::Header, BlockKind::Paragraph]
        );
        assert_eq!(kinds(&deck.pages[2]), vec![BlockKind::Paragraph]);
    }

    #[test]
    fn test_no_text_lost_or_duplicated() {
        let body = "# One\n\nAlpha beta.\n\n> Gamma.\n\n- d\n- e\n\nZeta eta theta.";
        let deck = Paginator::new(ExportFormat::Square).paginate(&article_with_body(body));

        let expected: Vec<Block> = normalize_paragraphs(body)
            .iter()
            .map(|p| classify_block(p))
            .collect();
        let actual: Vec<Block> = deck.all_blocks().into_iter().cloned().collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_conservation_across_page_boundaries() {
        let paragraphs: Vec<String> = (0..12).map(|i| format!("{}", "ab".repeat(60 + i))).collect();
        let body = paragraphs.join("\n\n");
        let deck = Paginator::new(ExportFormat::Square).paginate(&article_with_body(&body));

        let total: usize = deck.all_blocks().iter().map(|b| b.len()).sum();
        let expected: usize = normalize_paragraphs(&body)
            .iter()
            .map(|p| classify_block(p).len())
            .sum();
        assert_eq!(total, expected);
    }

    #[test]
    fn test_headers_are_always_page_initial() {
        let body = "Intro text.\n\n# A\n\nMore.\n\n# B\n\nEven more.\n\n## C\n\nTail.";
        for format in [ExportFormat::Square, ExportFormat::Portrait] {
            let deck = Paginator::new(format).paginate(&article_with_body(body));
            for page in deck.content_pages() {
                for (i, block) in page.blocks().iter().enumerate() {
                    if block.kind == BlockKind::Header {
                        assert_eq!(i, 0, "header must open its page");
                    }
                }
            }
        }
    }

    #[test]
    fn test_pagination_is_deterministic() {
        let article = article_with_body("# A\n\nSome body text.\n\n> Quote.");
        let paginator = Paginator::new(ExportFormat::Portrait);
        assert_eq!(paginator.paginate(&article), paginator.paginate(&article));
    }

    #[test]
    fn test_portrait_never_needs_more_pages_than_square() {
        let paragraphs: Vec<String> = (0..6).map(|_| "y".repeat(200)).collect();
        let article = article_with_body(&paragraphs.join("\n\n"));

        let square = Paginator::new(ExportFormat::Square).paginate(&article);
        let portrait = Paginator::new(ExportFormat::Portrait).paginate(&article);

        assert!(portrait.page_count() <= square.page_count());
        // Same total content either way.
        let sq: usize = square.all_blocks().iter().map(|b| b.len()).sum();
        let pt: usize = portrait.all_blocks().iter().map(|b| b.len()).sum();
        assert_eq!(sq, pt);
    }

    #[test]
    fn test_content_page_ids_are_sequential() {
        let paragraphs: Vec<String> = (0..6).map(|_| "z".repeat(200)).collect();
        let deck = Paginator::new(ExportFormat::Square)
            .paginate(&article_with_body(&paragraphs.join("\n\n")));

        let ids: Vec<&str> = deck.content_pages().map(|p| p.id.as_str()).collect();
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(*id, format!("page-{}", i + 1));
        }
    }
}
