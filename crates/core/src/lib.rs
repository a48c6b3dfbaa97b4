//! Core domain types, Markdown block classification, and slide pagination
//! for magazine social-media image exports.

pub mod category;
pub mod classify;
pub mod error;
pub mod export;
pub mod normalize;
pub mod paginate;
pub mod types;

pub use category::{resolve_label, Category, ResolvedLabel};
pub use classify::classify_block;
pub use error::{Error, Result};
pub use export::ExportSession;
pub use normalize::{normalize_paragraphs, slugify, strip_emphasis};
pub use paginate::Paginator;
pub use types::{Article, Block, BlockKind, ExportFormat, Page, PageBody, SlideDeck};
