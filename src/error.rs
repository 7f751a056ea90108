/// Errors arising while constructing a board.
///
/// Ordinary gameplay outcomes (an illegal move, no hint available) are never
/// errors; they are plain `false`/`None` results.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board creation was requested with a non-positive dimension or an odd
    /// cell count, which cannot hold a whole number of pairs.
    #[error("invalid board dimensions {rows}x{cols}: sides must be positive and the cell count even")]
    InvalidDimensions {
        /// The requested row count.
        rows: usize,
        /// The requested column count.
        cols: usize,
    },

    /// A layout string passed to [`Board::from_layout`](crate::Board::from_layout)
    /// was empty, ragged, or contained a character that is neither `.` nor a
    /// base-36 digit.
    #[error("unparseable board layout: {0}")]
    BadLayout(String),
}
