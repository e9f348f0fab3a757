//! # Card Rendering
//!
//! Turns a list of texts into a grid of bordered index cards.
//!
//! ```text
//!   texts ──► measure_required_height ──► height
//!     │                                     │
//!     └──────────► build_card(text, id, height) ──► cards ──► format_grid ──► String
//! ```
//!
//! The height is measured first across all texts, then every card is built
//! once at that height, so all cards in one grid share the same row count.
//!
//! ## Modules
//!
//! - [`layout`]: `CardLayout` dimensions and border glyphs
//! - [`text_wrap`]: word splitting and line packing
//! - [`builder`]: one card from text, id and height
//! - [`grid`]: tiling finished cards into rows

pub mod builder;
pub mod grid;
pub mod layout;
pub mod text_wrap;

use log::debug;
use serde_json::Value;

use crate::core::error::{CardError, Result};

pub use builder::{Card, build_card, required_height};
pub use grid::{format_grid, rows_per_card};
pub use layout::{BorderGlyphs, CardLayout};
pub use text_wrap::{pack_lines, split_words, wrap_text};

/// Texts shown when the binary is run without input.
pub const SAMPLE_TEXTS: &[&str] =
    &["Aujourd'hui, dans le cours de documentation, nous allons voir <blank>."];

/// Tallest card any of `texts` needs, floored at `layout.min_height`.
pub fn measure_required_height<S: AsRef<str>>(texts: &[S], layout: &CardLayout) -> usize {
    texts
        .iter()
        .map(|text| required_height(text.as_ref(), layout))
        .fold(layout.min_height, usize::max)
}

/// Build every card at the shared height. Ids are input positions.
pub fn build_cards<S: AsRef<str>>(texts: &[S], layout: &CardLayout) -> Vec<Card> {
    let height = measure_required_height(texts, layout);
    debug!("Building {} cards at height {}", texts.len(), height);

    texts
        .iter()
        .enumerate()
        .map(|(id, text)| build_card(text.as_ref(), id, height, layout))
        .collect()
}

/// Render `texts` as a grid of cards.
pub fn render_cards<S: AsRef<str>>(texts: &[S], layout: &CardLayout) -> Result<String> {
    layout.validate()?;
    layout.check_ids_fit(texts.len())?;
    let cards = build_cards(texts, layout);
    let rows = rows_per_card(&cards, layout.row_width())?;
    format_grid(&cards, rows, layout)
}

/// Extract card texts from a JSON document.
///
/// The document must be an array whose elements are all strings.
pub fn texts_from_json(value: &Value) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        CardError::InvalidArgument(format!(
            "expected a list of card texts, got {}",
            json_kind(value)
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                CardError::InvalidArgument(format!(
                    "card {index} must be text, got {}",
                    json_kind(item)
                ))
            })
        })
        .collect()
}

/// Validate a JSON document and render it.
pub fn render_json(value: &Value, layout: &CardLayout) -> Result<String> {
    let texts = texts_from_json(value)?;
    render_cards(&texts, layout)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
