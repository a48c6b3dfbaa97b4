//! WASM-compatible wrapper for article slide pagination.
//!
//! This crate exposes the pagination engine to JavaScript so the browser
//! front end can compute slide decks and export filenames without
//! re-implementing the rules.

use magslide_core::{Article, ExportFormat, Page, Paginator};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of paginating an article.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult {
    /// The format the deck was paginated for.
    pub format: String,
    /// Total page count, cover included.
    pub page_count: usize,
    /// Cover page followed by the content pages.
    pub pages: Vec<Page>,
}

/// Render-surface description for one export format.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatInfo {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Soft character budget per content page.
    pub capacity: usize,
}

/// Paginate an article record into slide pages.
///
/// # Arguments
/// * `article_json` - The article record as a JSON string
/// * `format` - `"square"` or `"portrait"`
///
/// # Returns
/// A JavaScript object with the pagination result, or throws on error.
#[wasm_bindgen]
pub fn paginate_article(article_json: &str, format: &str) -> Result<JsValue, JsValue> {
    let result =
        paginate_article_impl(article_json, format).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn paginate_article_impl(article_json: &str, format: &str) -> Result<PaginationResult, String> {
    let article =
        Article::from_json_slice(article_json.as_bytes()).map_err(|e| e.to_string())?;
    let format = ExportFormat::parse(format).map_err(|e| e.to_string())?;

    let deck = Paginator::new(format).paginate(&article);

    Ok(PaginationResult {
        format: format.name().to_string(),
        page_count: deck.page_count(),
        pages: deck.pages,
    })
}

/// Pixel dimensions and capacity for a format name.
#[wasm_bindgen]
pub fn format_info(format: &str) -> Result<JsValue, JsValue> {
    let format = ExportFormat::parse(format).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let (width, height) = format.dimensions();

    serde_wasm_bindgen::to_value(&FormatInfo {
        width,
        height,
        capacity: format.capacity(),
    })
    .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Deterministic download filename for one exported page image.
///
/// `page_number` is 1-based.
#[wasm_bindgen]
pub fn export_filename(title: &str, page_number: usize) -> String {
    format!("{}-page-{}.png", magslide_core::slugify(title), page_number)
}

#[cfg(test)]
const ARTICLE_JSON: &str = r##"{
    "id": "a1",
    "title": "The Paradox of Choice",
    "content": "# Intro\n\nHello world.",
    "category": "psychology"
}"##;


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_paginate_article_returns_js_object() {
        let value = paginate_article(super::ARTICLE_JSON, "portrait").unwrap();
        assert!(!value.is_undefined());
    }
}
