use itertools::Itertools;
use tracing::debug;

use crate::board::Board;
use crate::location::Location;

/// One discovered legal move.
///
/// A hint is ephemeral: it is recomputed on every request and is stale as soon
/// as the board mutates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hint {
    /// The first member of the pair in scan order.
    pub start: Location,
    /// The second member, lexicographically after `start` in row-major order.
    pub end: Location,
}

impl Board {
    /// Find any legal move, or `None` if no pair on the board connects.
    ///
    /// Occupied cells are scanned in row-major order and each is paired with
    /// every occupied cell after it, so the result is deterministic for a
    /// given board. `None` with tiles still on the board means the game is
    /// stuck, which is distinct from being won.
    ///
    /// This enumerates `O((rows * cols)^2)` candidate pairs, each followed by
    /// a bounded path search; fine at the default 8x8, not meant for large
    /// boards.
    pub fn hint(&self) -> Option<Hint> {
        let hint = (0..self.rows())
            .cartesian_product(0..self.cols())
            .map(|(row, col)| Location(row, col))
            .filter(|location| !self.cell(*location).is_empty())
            .tuple_combinations()
            .find(|&(start, end)| self.can_connect(start, end))
            .map(|(start, end)| Hint { start, end });

        debug!(?hint, "hint scan");
        hint
    }
}
