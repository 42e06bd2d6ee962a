use std::fmt;

use springer_core::{Board, Cell};

/// A completed search: the cells of the path from start to goal inclusive,
/// and the cost in moves (`cells.len() - 1`).
///
/// When the goal is unreachable the result degenerates to the start cell
/// alone with cost 0; callers detect that by checking the last cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub cells: Vec<Cell>,
    pub cost: i32,
}

impl PathResult {
    /// Whether this path actually ends at `goal`.
    #[inline]
    pub fn reaches(&self, goal: Cell) -> bool {
        self.cells.last() == Some(&goal)
    }
}

/// Errors from [`PathField::path`](crate::PathField::path).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A start or goal cell lies outside the board.
    OutOfBounds { cell: Cell, board: Board },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, board } => {
                write!(f, "cell {cell} is outside the {board} board")
            }
        }
    }
}

impl std::error::Error for PathError {}

// ---------------------------------------------------------------------------
// Internal search state
// ---------------------------------------------------------------------------

/// Per-cell record of the best known cost and the move that achieved it.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry ordered by priority, then by insertion sequence.
///
/// The sequence number is the explicit tie-break: among equal priorities the
/// earliest-pushed entry pops first, so search order (and therefore path
/// output) is reproducible.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct FrontierEntry {
    pub(crate) f: i32,
    pub(crate) seq: u32,
    pub(crate) idx: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest f first,
        // FIFO among equals.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathField
// ---------------------------------------------------------------------------

/// Reusable search state for one board.
///
/// `PathField` owns the per-cell node array and the neighbor scratch buffer
/// so repeated queries allocate nothing after warm-up. Nodes from earlier
/// searches are invalidated lazily by bumping a generation counter rather
/// than by clearing the array.
pub struct PathField {
    board: Board,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) nbuf: Vec<Cell>,
}

impl PathField {
    /// Create a search field for the given board.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            nodes: vec![Node::default(); board.len()],
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The board being searched.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Convert a cell to a flat index. Returns `None` if off the board.
    #[inline]
    pub(crate) fn idx(&self, c: Cell) -> Option<usize> {
        if !self.board.contains(c) {
            return None;
        }
        Some((c.row * self.board.side() + c.col) as usize)
    }

    /// Convert a flat index back to a cell.
    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        let side = self.board.side();
        Cell::new(idx as i32 % side, idx as i32 / side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn frontier_pops_lowest_priority_first() {
        let mut open = BinaryHeap::new();
        open.push(FrontierEntry { f: 3, seq: 0, idx: 0 });
        open.push(FrontierEntry { f: 1, seq: 1, idx: 1 });
        open.push(FrontierEntry { f: 2, seq: 2, idx: 2 });
        let order: Vec<_> = std::iter::from_fn(|| open.pop().map(|e| e.idx)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn frontier_breaks_ties_fifo() {
        let mut open = BinaryHeap::new();
        for seq in 0..8u32 {
            open.push(FrontierEntry { f: 5, seq, idx: seq as usize });
        }
        let order: Vec<_> = std::iter::from_fn(|| open.pop().map(|e| e.idx)).collect();
        assert_eq!(order, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn idx_round_trip() {
        let field = PathField::new(Board::STANDARD);
        for c in Board::STANDARD.iter() {
            let i = field.idx(c).unwrap();
            assert_eq!(field.cell(i), c);
        }
        assert_eq!(field.idx(Cell::new(8, 0)), None);
        assert_eq!(field.idx(Cell::new(0, -1)), None);
    }

    #[test]
    fn out_of_bounds_display() {
        let err = PathError::OutOfBounds {
            cell: Cell::new(9, 2),
            board: Board::STANDARD,
        };
        assert_eq!(err.to_string(), "cell (9, 2) is outside the 8x8 board");
    }
}
