use springer_core::{Board, Cell};

use crate::distance::manhattan;
use crate::traits::{GuidedMover, Mover, WeightedMover};

/// The eight knight displacements, in enumeration order.
///
/// The order is fixed: together with the frontier's FIFO tie-break it pins
/// down which of several equally short paths a search returns.
pub const KNIGHT_JUMPS: [Cell; 8] = [
    Cell::new(2, 1),
    Cell::new(1, 2),
    Cell::new(-1, 2),
    Cell::new(-2, 1),
    Cell::new(-2, -1),
    Cell::new(-1, -2),
    Cell::new(1, -2),
    Cell::new(2, -1),
];

/// Knight move generation on a bounded board.
///
/// Applies each of [`KNIGHT_JUMPS`] to a cell and discards landings off the
/// board. Every move costs 1; the goal estimate is Manhattan distance.
#[derive(Copy, Clone, Debug)]
pub struct Knight {
    board: Board,
}

impl Knight {
    /// Create a knight mover for the given board.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The board this mover is clipped to.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }
}

impl Mover for Knight {
    fn moves(&self, from: Cell, buf: &mut Vec<Cell>) {
        for &jump in KNIGHT_JUMPS.iter() {
            let to = from + jump;
            if self.board.contains(to) {
                buf.push(to);
            }
        }
    }
}

impl WeightedMover for Knight {
    fn cost(&self, _from: Cell, _to: Cell) -> i32 {
        1
    }
}

impl GuidedMover for Knight {
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}
