use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::cell::{Cell, SymbolId};
use crate::error::BoardError;
use crate::location::{Dimension, Location};

/// Default board height; the classic game deals 8x8.
pub const DEFAULT_ROWS: usize = 8;
/// Default board width.
pub const DEFAULT_COLS: usize = 8;

/// A rectangular board of paired tiles.
///
/// A board is owned exclusively by one in-progress game and is mutated in
/// place as pairs are cleared. Every operation here runs to completion without
/// blocking; a host embedding boards in a concurrent environment must
/// serialize access per board (see [`Registry`](crate::Registry)).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    // rows, cols
    pub(crate) dims: (Dimension, Dimension),
}

impl Board {
    /// Generate a `rows` x `cols` board holding every pair class in
    /// `[0, rows * cols / 2)` exactly twice, shuffled uniformly by `rng`.
    ///
    /// The shuffle is unconstrained beyond uniformity: no solvability check is
    /// made, so a degenerate deal with no legal first move is possible. This
    /// is a known limitation; callers wanting a playable opening must
    /// regenerate.
    pub fn generate_with<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, BoardError> {
        let (Some(r), Some(c)) = (NonZero::new(rows), NonZero::new(cols)) else {
            return Err(BoardError::InvalidDimensions { rows, cols });
        };
        if rows * cols % 2 != 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }

        // the pair multiset {0, 0, 1, 1, ...}, dealt into row-major order
        let mut tiles: Vec<SymbolId> = (0..rows * cols / 2).flat_map(|id| [id, id]).collect();
        tiles.shuffle(rng);

        let cells = Array2::from_shape_vec((rows, cols), tiles.into_iter().map(Cell::Tile).collect())
            .expect("tile count matches dims");

        debug!(rows, cols, "generated board");
        Ok(Self { cells, dims: (r, c) })
    }

    /// Generate a board with the process-wide random source.
    /// See [`generate_with`](Self::generate_with).
    pub fn generate(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::generate_with(rows, cols, &mut StdRng::from_os_rng())
    }

    /// Generate a board with the default dimensions,
    /// [`DEFAULT_ROWS`] x [`DEFAULT_COLS`].
    pub fn new() -> Self {
        Self::generate(DEFAULT_ROWS, DEFAULT_COLS).expect("default dims hold whole pairs")
    }

    /// Parse a board from its [`Display`] form: one row per line, `.` for an
    /// empty cell, a base-36 digit for a tile. Intended for fixtures and
    /// debugging; no pairing constraint is enforced on the parsed cells.
    ///
    /// The char grid distinguishes at most 36 pair classes. Boards with more
    /// (over 72 cells) render the excess ids as `#`, which this parser
    /// rejects, so oversized boards fail loudly instead of colliding ids.
    pub fn from_layout(layout: &str) -> Result<Self, BoardError> {
        let lines: Vec<&str> = layout.lines().filter(|line| !line.is_empty()).collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        let (Some(r), Some(c)) = (NonZero::new(rows), NonZero::new(cols)) else {
            return Err(BoardError::BadLayout("empty layout".into()));
        };

        let mut cells = Array2::from_elem((rows, cols), Cell::Empty);
        for (i, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(BoardError::BadLayout(format!("row {i} is not {cols} cells wide")));
            }
            for (j, ch) in line.chars().enumerate() {
                cells[(i, j)] = match ch {
                    '.' => Cell::Empty,
                    _ => {
                        let id = ch
                            .to_digit(36)
                            .ok_or_else(|| BoardError::BadLayout(format!("bad cell {ch:?} in row {i}")))?;
                        Cell::Tile(id as SymbolId)
                    }
                };
            }
        }

        Ok(Self { cells, dims: (r, c) })
    }

    /// Board height.
    pub fn rows(&self) -> usize {
        self.dims.0.get()
    }

    /// Board width.
    pub fn cols(&self) -> usize {
        self.dims.1.get()
    }

    /// Whether `location` lies on the board.
    pub fn is_in_bounds(&self, location: Location) -> bool {
        location.0 < self.rows() && location.1 < self.cols()
    }

    /// The cell at `location`, or `None` if it is out of bounds.
    pub fn get(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    // unchecked accessors for callers which have already validated `location`
    pub(crate) fn cell(&self, location: Location) -> Cell {
        self.cells[location.as_index()]
    }

    pub(crate) fn set(&mut self, location: Location, cell: Cell) {
        self.cells[location.as_index()] = cell;
    }

    /// Attempt to clear the pair at `start` and `end`.
    ///
    /// Legality is decided by [`can_connect`](Self::can_connect). On success
    /// both cells become empty and `true` is returned; on failure the board is
    /// untouched and `false` is returned. An illegal move is an ordinary
    /// outcome, not an error.
    pub fn make_move(&mut self, start: Location, end: Location) -> bool {
        if !self.can_connect(start, end) {
            debug!(?start, ?end, "move rejected");
            return false;
        }

        self.set(start, Cell::Empty);
        self.set(end, Cell::Empty);
        debug!(?start, ?end, remaining = self.tiles_remaining(), "pair cleared");
        true
    }

    /// True when every tile has been cleared, i.e. the game is won.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Count of tiles still on the board.
    pub fn tiles_remaining(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Row-major snapshot of the board as nullable pair-class ids, the
    /// representation transport layers serialize to clients.
    pub fn as_rows(&self) -> Vec<Vec<Option<SymbolId>>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell.display_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
