//! Assembles a single card from its text, id and target height.
//!
//! A card is stored flat: its rows are concatenated with no separators, and
//! the row structure is recovered by chunking on the layout's row width.
//!
//! ```text
//! ┌───────────────┐   top border
//! │dans le cours  │   content rows (wrapped text)
//! │               │   blank rows up to the target height
//! │              3|   footer with the id
//! └───────────────┘   bottom border
//! ```

use std::fmt;

use super::layout::{CardLayout, VERTICAL_OVERHEAD};
use super::text_wrap::{char_len, wrap_text};

/// Rows below the padded body: footer + bottom border.
const TRAILING_ROWS: usize = 2;

/// One rendered card, rows concatenated without separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card(String);

impl Card {
    /// Wrap an already rendered string. No validation happens here; the grid
    /// formatter checks row alignment.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in chars (columns), not bytes.
    pub fn char_len(&self) -> usize {
        char_len(&self.0)
    }

    /// Number of whole rows, or `None` if the card ends with a partial row.
    pub fn row_count(&self, row_width: usize) -> Option<usize> {
        let len = self.char_len();
        if row_width == 0 || len % row_width != 0 {
            return None;
        }
        Some(len / row_width)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Physical rows `text` needs when nothing pads it.
pub fn required_height(text: &str, layout: &CardLayout) -> usize {
    wrap_text(text, layout.interior_width).len() + VERTICAL_OVERHEAD
}

/// Build one card.
///
/// `height` counts physical rows, borders and footer included. It is raised
/// to `layout.min_height` if lower. Content taller than `height` is never
/// cut; the card simply comes out taller.
pub fn build_card(text: &str, id: usize, height: usize, layout: &CardLayout) -> Card {
    let height = height.max(layout.min_height);
    let lines = wrap_text(text, layout.interior_width);

    let mut raw = String::with_capacity(height * layout.row_width() * 3);
    raw.push_str(&layout.top_row());
    for line in &lines {
        raw.push_str(&layout.content_row(line));
    }

    let mut rows = 1 + lines.len();
    let body_rows = height.saturating_sub(TRAILING_ROWS);
    while rows < body_rows {
        raw.push_str(&layout.content_row(""));
        rows += 1;
    }

    raw.push_str(&layout.footer_row(id));
    raw.push_str(&layout.bottom_row());
    Card(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(card: &Card, layout: &CardLayout) -> Vec<String> {
        let chars: Vec<char> = card.as_str().chars().collect();
        chars
            .chunks(layout.row_width())
            .map(|c| c.iter().collect())
            .collect()
    }

    #[test]
    fn hi_card_at_min_height() {
        let layout = CardLayout::default();
        let card = build_card("Hi", 0, 0, &layout);
        assert_eq!(
            rows_of(&card, &layout),
            vec![
                "┌───────────────┐",
                "│Hi             │",
                "│               │",
                "│               │",
                "│               │",
                "│               │",
                "│              0|",
                "└───────────────┘",
            ]
        );
    }

    #[test]
    fn card_is_whole_rows() {
        let layout = CardLayout::default();
        let card = build_card("some text that wraps over a few lines", 3, 10, &layout);
        assert_eq!(card.row_count(layout.row_width()), Some(10));
    }

    #[test]
    fn height_never_below_minimum() {
        let layout = CardLayout::default();
        let card = build_card("x", 1, 2, &layout);
        assert_eq!(card.row_count(layout.row_width()), Some(layout.min_height));
    }

    #[test]
    fn tall_content_is_not_truncated() {
        let layout = CardLayout::default();
        let text = "word ".repeat(20);
        let needed = required_height(&text, &layout);
        assert!(needed > layout.min_height);

        let card = build_card(&text, 0, layout.min_height, &layout);
        assert_eq!(card.row_count(layout.row_width()), Some(needed));
    }

    #[test]
    fn required_height_counts_borders_and_footer() {
        let layout = CardLayout::default();
        assert_eq!(required_height("Hi", &layout), 4);
        // six wrapped lines + 3
        let text = "Aujourd'hui, dans le cours de documentation, nous allons voir <blank>.";
        assert_eq!(required_height(text, &layout), 9);
    }

    #[test]
    fn footer_right_justifies_id() {
        let layout = CardLayout::default();
        let card = build_card("Hi", 123, 0, &layout);
        let rows = rows_of(&card, &layout);
        assert_eq!(rows[rows.len() - 2], "│            123|");
    }

    #[test]
    fn custom_width_changes_row_width() {
        let layout = CardLayout {
            interior_width: 5,
            min_height: 4,
            ..Default::default()
        };
        let card = build_card("abcdefgh", 7, 0, &layout);
        assert_eq!(
            rows_of(&card, &layout),
            vec!["┌─────┐", "│abcd-│", "│efgh │", "│    7|", "└─────┘"]
        );
    }

    #[test]
    fn partial_row_has_no_row_count() {
        let card = Card::from_raw("┌──┐│");
        assert_eq!(card.row_count(4), None);
    }
}
