use springer_core::Cell;

/// Minimal move-generation interface.
pub trait Mover {
    /// Append the cells reachable from `from` in one move into `buf`.
    /// The caller clears `buf` before calling. Enumeration order is part
    /// of the contract: it determines which of several equally short paths
    /// the search returns.
    fn moves(&self, from: Cell, buf: &mut Vec<Cell>);
}

/// Mover with weighted (positive-cost) moves.
pub trait WeightedMover: Mover {
    /// Cost of the move from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Cell, to: Cell) -> i32;
}

/// Mover with a goal-distance estimate for guided search.
pub trait GuidedMover: WeightedMover {
    /// Estimate of the remaining cost from `from` to `to`. The estimate is
    /// not required to be admissible; when it overestimates, guided search
    /// is best-effort rather than provably optimal.
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}
