/// Identifier of a matching pair class. At generation, every id in
/// `[0, rows * cols / 2)` is placed on the board exactly twice.
pub type SymbolId = usize;

/// One board cell: cleared, or holding a tile of some pair class.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// No tile here; connection paths may pass through.
    #[default]
    Empty,
    /// An uncleared tile of the given pair class.
    Tile(SymbolId),
}

impl Cell {
    /// The pair class of the tile here, if any.
    pub fn symbol(&self) -> Option<SymbolId> {
        match self {
            Self::Empty => None,
            Self::Tile(id) => Some(*id),
        }
    }

    /// Whether this cell holds no tile.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    // `.` for empty, a base-36 digit for a tile; the inverse of the
    // `Board::from_layout` cell syntax. Only 36 pair classes have a digit;
    // larger ids render as an explicit `#` marker, which `from_layout`
    // rejects, rather than as a colliding digit.
    pub(crate) fn display_char(&self) -> char {
        match self {
            Self::Empty => '.',
            Self::Tile(id) if *id < 36 => char::from_digit(*id as u32, 36).expect("base-36 digit"),
            Self::Tile(_) => '#',
        }
    }
}
