//! Card dimensions and border glyphs.
//!
//! Every stage of the pipeline takes a [`CardLayout`] by reference instead of
//! reading process-wide constants, so alternate dimensions can be rendered
//! side by side (and tested) without touching global state.

use crate::core::error::CardError;

/// Columns between the two vertical borders
pub const DEFAULT_INTERIOR_WIDTH: usize = 15;
/// Physical rows per card, borders and footer included
pub const DEFAULT_MIN_HEIGHT: usize = 8;
/// Cards tiled side by side before starting a new group
pub const DEFAULT_CARDS_PER_ROW: usize = 5;

/// Left + right border consumed horizontally by every row
pub const HORIZONTAL_OVERHEAD: usize = 2;
/// Top border + footer + bottom border wrapped around the content rows
pub const VERTICAL_OVERHEAD: usize = 3;
/// Narrowest interior that can still force-split a word (one char + `-`)
pub const MIN_INTERIOR_WIDTH: usize = 2;

/// The glyph set used to draw a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// Right border of the footer row. Deliberately an ASCII bar in the
    /// default set: existing output relies on it.
    pub footer_right: char,
}

impl BorderGlyphs {
    /// Light box-drawing set: `┌─┐ │ └─┘`, footer closed with `|`.
    pub const LIGHT: BorderGlyphs = BorderGlyphs {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
        footer_right: '|',
    };
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        Self::LIGHT
    }
}

/// Immutable layout configuration threaded through the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub interior_width: usize,
    pub min_height: usize,
    pub cards_per_row: usize,
    pub glyphs: BorderGlyphs,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            interior_width: DEFAULT_INTERIOR_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            cards_per_row: DEFAULT_CARDS_PER_ROW,
            glyphs: BorderGlyphs::LIGHT,
        }
    }
}

impl CardLayout {
    /// Width of one physical row, borders included.
    pub fn row_width(&self) -> usize {
        self.interior_width + HORIZONTAL_OVERHEAD
    }

    /// Reject dimensions the pipeline cannot render.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.interior_width < MIN_INTERIOR_WIDTH {
            return Err(CardError::InvalidArgument(format!(
                "interior width must be at least {MIN_INTERIOR_WIDTH}, got {}",
                self.interior_width
            )));
        }
        if self.cards_per_row == 0 {
            return Err(CardError::InvalidArgument(
                "cards per row must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Reject batches whose largest id is wider than the footer's interior.
    pub fn check_ids_fit(&self, card_count: usize) -> Result<(), CardError> {
        let widest = card_count.saturating_sub(1).to_string().len();
        if widest > self.interior_width {
            return Err(CardError::InvalidArgument(format!(
                "card id {} needs {widest} columns, interior width is {}",
                card_count - 1,
                self.interior_width
            )));
        }
        Ok(())
    }

    /// `┌───…───┐`
    pub fn top_row(&self) -> String {
        self.horizontal_rule(self.glyphs.top_left, self.glyphs.top_right)
    }

    /// `└───…───┘`
    pub fn bottom_row(&self) -> String {
        self.horizontal_rule(self.glyphs.bottom_left, self.glyphs.bottom_right)
    }

    /// `│text     │`, left-justified. Text wider than the interior is kept whole.
    pub fn content_row(&self, text: &str) -> String {
        format!(
            "{v}{text:<width$}{v}",
            v = self.glyphs.vertical,
            width = self.interior_width
        )
    }

    /// `│      id|`, right-justified.
    pub fn footer_row(&self, id: usize) -> String {
        format!(
            "{}{id:>width$}{}",
            self.glyphs.vertical,
            self.glyphs.footer_right,
            width = self.interior_width
        )
    }

    fn horizontal_rule(&self, left: char, right: char) -> String {
        let mut row = String::with_capacity(self.row_width() * 3);
        row.push(left);
        row.extend(std::iter::repeat_n(self.glyphs.horizontal, self.interior_width));
        row.push(right);
        row
    }
}
