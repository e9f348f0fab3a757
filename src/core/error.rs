use thiserror::Error;

/// Failures surfaced by the card pipeline. Both kinds are fatal: no partial
/// output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// Input is not a list of strings, or the layout cannot be rendered.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A built card is not made of whole rows. Indicates a layout bug, not
    /// bad user input.
    #[error("bad card format: card {index} is {len} chars, not a multiple of row width {row_width}")]
    Format {
        index: usize,
        len: usize,
        row_width: usize,
    },

    /// Cards in one batch disagree on height.
    #[error("bad card format: card {index} has {rows} rows, expected {expected}")]
    RowCount {
        index: usize,
        rows: usize,
        expected: usize,
    },
}

impl CardError {
    /// True for internal consistency violations (as opposed to caller errors).
    pub fn is_format_error(&self) -> bool {
        matches!(self, CardError::Format { .. } | CardError::RowCount { .. })
    }
}

pub type Result<T> = std::result::Result<T, CardError>;
