use std::collections::BinaryHeap;

use springer_core::Cell;

use crate::field::{FrontierEntry, PathError, PathField, PathResult};
use crate::traits::GuidedMover;

/// Search mode: how frontier priority is computed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Priority is the cumulative cost alone (Dijkstra's algorithm).
    Uniform,
    /// Priority adds the mover's goal estimate. A*-shaped, but best-effort
    /// when the estimate overestimates, as the knight's Manhattan estimate
    /// does.
    Guided,
}

impl Algorithm {
    /// The other mode.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Uniform => Self::Guided,
            Self::Guided => Self::Uniform,
        }
    }
}

impl PathField {
    /// Compute a cheapest path from `start` to `goal`.
    ///
    /// Returns the full path including both endpoints, and its cost in
    /// moves. If the goal cannot be reached the result degenerates to the
    /// start cell alone with cost 0; an unexpectedly short path is the
    /// caller's reachability signal. Off-board endpoints are rejected with
    /// [`PathError::OutOfBounds`].
    ///
    /// Both modes share one relaxation loop; the mode only changes the
    /// priority formula. The frontier has no decrease-key: relaxing a cell
    /// pushes a duplicate entry, and stale entries are skipped when popped.
    pub fn path<M: GuidedMover>(
        &mut self,
        mover: &M,
        start: Cell,
        goal: Cell,
        algorithm: Algorithm,
    ) -> Result<PathResult, PathError> {
        let start_idx = self.idx(start).ok_or(PathError::OutOfBounds {
            cell: start,
            board: self.board(),
        })?;
        let goal_idx = self.idx(goal).ok_or(PathError::OutOfBounds {
            cell: goal,
            board: self.board(),
        })?;

        if start_idx == goal_idx {
            return Ok(PathResult {
                cells: vec![start],
                cost: 0,
            });
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut seq: u32 = 0;
        let start_f = match algorithm {
            Algorithm::Uniform => 0,
            Algorithm::Guided => mover.estimate(start, goal),
        };
        open.push(FrontierEntry {
            f: start_f,
            seq,
            idx: start_idx,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = open.pop() else {
                break false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            // First pop of the goal ends the search.
            if ci == goal_idx {
                break true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_cell = self.cell(ci);

            nbuf.clear();
            mover.moves(current_cell, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let tentative = current_g + mover.cost(current_cell, nc);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen && tentative >= n.g {
                    continue;
                }
                n.generation = cur_gen;
                n.g = tentative;
                n.parent = ci;
                n.open = true;

                let f = match algorithm {
                    Algorithm::Uniform => tentative,
                    Algorithm::Guided => tentative + mover.estimate(nc, goal),
                };
                seq += 1;
                open.push(FrontierEntry { f, seq, idx: ni });
            }
        };

        self.nbuf = nbuf;

        if !found {
            // Exhausted frontier: the goal was never reached. Return the
            // start alone; callers detect this with `PathResult::reaches`.
            return Ok(PathResult {
                cells: vec![start],
                cost: 0,
            });
        }

        // Reconstruct by walking parent links back from the goal.
        let mut cells = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            cells.push(self.cell(ci));
            ci = self.nodes[ci].parent;
        }
        cells.reverse();
        let cost = cells.len() as i32 - 1;
        Ok(PathResult { cells, cost })
    }
}
