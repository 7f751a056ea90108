#![warn(missing_docs)]

//! # `tilematch`
//!
//! The board and connectivity engine for a tile-matching connection puzzle of the
//! [Shisen-Sho](https://en.wikipedia.org/wiki/Shisen-Sho) family.
//! A board is a rectangular grid of paired tiles; a move clears two tiles of the same
//! pair class if they can be joined by an orthogonal path that changes direction at
//! most twice and passes only through empty cells.
//! Begin by generating a [`Board`], then drive a game with
//! [`make_move()`](Board::make_move), [`hint()`](Board::hint), and
//! [`is_cleared()`](Board::is_cleared).
//!
//! ```
//! use tilematch::Board;
//!
//! let mut board = Board::generate(4, 4)?;
//! if let Some(hint) = board.hint() {
//!     assert!(board.make_move(hint.start, hint.end));
//! }
//! # Ok::<(), tilematch::BoardError>(())
//! ```
//!
//! # Internals
//! Move legality is decided by a bounded breadth-first search over states of the form
//! (cell, heading, direction changes spent). From each state the search slides whole
//! straight rays through empty cells, and branching perpendicular costs one of the two
//! allowed direction changes. The visited set is keyed on the entire state rather than
//! the cell alone, so a cell first reached with an expensive heading remains reachable
//! later under a different heading or a cheaper turn count.
//!
//! Generation deals a uniformly shuffled multiset of tile pairs onto the grid and
//! makes no solvability guarantee: a deal with no legal first move is possible, and
//! accepted. Hint discovery scans all occupied pairs in row-major order
//! and reports the first connectable one, so it is deterministic for a fixed board but
//! quadratic in cell count.
//!
//! The crate is synchronous and session-free. Hosts that keep several concurrent games
//! alive can use [`Registry`] to key exclusively-owned boards by [`GameId`] and to
//! serialize access per game.

pub use board::{Board, DEFAULT_COLS, DEFAULT_ROWS};
pub use cell::{Cell, SymbolId};
pub use connect::TURN_BUDGET;
pub use error::BoardError;
pub use hint::Hint;
pub use location::Location;
pub use registry::{GameId, Registry};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod connect;
pub(crate) mod direction;
pub(crate) mod error;
pub(crate) mod hint;
pub(crate) mod location;
pub(crate) mod registry;
