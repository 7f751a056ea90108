use std::collections::{HashSet, VecDeque};

use strum::VariantArray;
use tracing::trace;

use crate::board::Board;
use crate::cell::Cell;
use crate::direction::Direction;
use crate::location::Location;

/// Maximum number of direction changes a legal connection may make.
pub const TURN_BUDGET: u8 = 2;

// One frontier entry of the path search: a cell reached while moving in
// `heading` with `turns` direction changes already spent.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
struct SearchState {
    at: Location,
    heading: Direction,
    turns: u8,
}

impl Board {
    /// Whether the tiles at `start` and `end` may legally be cleared together:
    /// both locations in bounds and occupied by the same pair class, and
    /// joinable by an orthogonal path of at most [`TURN_BUDGET`] direction
    /// changes whose intermediate cells are all empty. The endpoints
    /// themselves are occupied by definition; only the cells between them must
    /// be clear.
    ///
    /// Read-only and symmetric in its arguments. A request with
    /// `start == end`, an out-of-bounds location, an empty cell, or a symbol
    /// mismatch is `false` without searching.
    pub fn can_connect(&self, start: Location, end: Location) -> bool {
        if start == end || !self.is_in_bounds(start) || !self.is_in_bounds(end) {
            return false;
        }

        match (self.cell(start), self.cell(end)) {
            (Cell::Tile(a), Cell::Tile(b)) if a == b => {}
            _ => return false,
        }

        self.find_path(start, end)
    }

    // Turn-bounded breadth-first search. Whole rays are slid at enqueue time,
    // so straight continuation is fully enumerated the moment a state is
    // created and a dequeued state only ever branches perpendicular, costing
    // one turn. The visited set is keyed on the entire (cell, heading, turns)
    // state, so a cell reached expensively stays reachable later under a
    // different heading or a smaller turn count.
    fn find_path(&self, start: Location, end: Location) -> bool {
        let mut visited: HashSet<SearchState> = HashSet::new();
        let mut frontier: VecDeque<SearchState> = VecDeque::new();

        for heading in Direction::VARIANTS {
            if self.slide(start, *heading, 0, end, &mut visited, &mut frontier) {
                return true;
            }
        }

        while let Some(state) = frontier.pop_front() {
            if state.turns == TURN_BUDGET {
                continue;
            }

            for heading in state.heading.perpendiculars() {
                if self.slide(state.at, heading, state.turns + 1, end, &mut visited, &mut frontier) {
                    return true;
                }
            }
        }

        trace!(?start, ?end, "no path within turn budget");
        false
    }

    // Walk cell by cell from `from` along `heading`, enqueueing every empty
    // cell passed. Returns true the moment the walk reaches `end`; any other
    // occupied cell, or the board edge, stops the ray.
    fn slide(
        &self,
        from: Location,
        heading: Direction,
        turns: u8,
        end: Location,
        visited: &mut HashSet<SearchState>,
        frontier: &mut VecDeque<SearchState>,
    ) -> bool {
        let mut at = heading.attempt_from(from);
        while self.is_in_bounds(at) {
            if at == end {
                return true;
            }
            if self.cell(at) != Cell::Empty {
                break;
            }

            let state = SearchState { at, heading, turns };
            if visited.insert(state) {
                frontier.push_back(state);
            }

            at = heading.attempt_from(at);
        }

        false
    }
}
