//! Tiles finished cards side by side.
//!
//! Cards are grouped `cards_per_row` at a time; each group is printed row by
//! row, with the matching row of every card in the group concatenated on one
//! output line. The last group is as wide as the cards it holds.

use super::builder::Card;
use super::layout::CardLayout;
use crate::core::error::{CardError, Result};

/// Row count shared by `cards`, taken from the first card.
///
/// An empty list has zero rows.
pub fn rows_per_card(cards: &[Card], row_width: usize) -> Result<usize> {
    match cards.first() {
        None => Ok(0),
        Some(card) => card.row_count(row_width).ok_or(CardError::Format {
            index: 0,
            len: card.char_len(),
            row_width,
        }),
    }
}

/// Render `cards` as one multi-line string.
///
/// Every card must be exactly `rows_per_card` rows of `layout.row_width()`
/// chars; anything else is a [`CardError::Format`] or
/// [`CardError::RowCount`] and nothing is rendered.
pub fn format_grid(cards: &[Card], rows_per_card: usize, layout: &CardLayout) -> Result<String> {
    layout.validate()?;
    let row_width = layout.row_width();

    let sliced = cards
        .iter()
        .enumerate()
        .map(|(index, card)| row_slices(card, index, row_width, rows_per_card))
        .collect::<Result<Vec<_>>>()?;

    let mut out = String::new();
    for group in sliced.chunks(layout.cards_per_row) {
        for row in 0..rows_per_card {
            for card_rows in group {
                out.push_str(card_rows[row]);
            }
            out.push('\n');
        }
    }

    log::debug!(
        "Tiled {} cards into {} groups of up to {}",
        cards.len(),
        cards.len().div_ceil(layout.cards_per_row),
        layout.cards_per_row
    );
    Ok(out)
}

/// Cut a card into its rows, checking alignment first.
fn row_slices(card: &Card, index: usize, row_width: usize, expected: usize) -> Result<Vec<&str>> {
    let len = card.char_len();
    if len % row_width != 0 {
        return Err(CardError::Format {
            index,
            len,
            row_width,
        });
    }
    let rows = len / row_width;
    if rows != expected {
        return Err(CardError::RowCount {
            index,
            rows,
            expected,
        });
    }

    let raw = card.as_str();
    let mut bounds: Vec<usize> = raw
        .char_indices()
        .step_by(row_width)
        .map(|(i, _)| i)
        .collect();
    bounds.push(raw.len());

    Ok(bounds.windows(2).map(|w| &raw[w[0]..w[1]]).collect())
}
