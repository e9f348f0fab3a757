//! cardgrid library exports
//!
//! Renders lists of texts as bordered index cards tiled in a grid:
//!
//! ```text
//! ┌───────────────┐┌───────────────┐
//! │Hi             ││well-known     │
//! │               ││test           │
//! │               ││               │
//! │               ││               │
//! │               ││               │
//! │              0|│              1|
//! └───────────────┘└───────────────┘
//! ```

pub mod card;
pub mod core;

pub use crate::card::{
    BorderGlyphs, Card, CardLayout, build_card, format_grid, measure_required_height,
    render_cards, render_json, texts_from_json,
};
pub use crate::core::error::CardError;
