//! The interaction state machine.

use springer_core::{Board, Cell};
use springer_paths::{Algorithm, Knight, PathField, PathResult};

/// Pixel size of one board square on the reference 600×600 canvas.
pub const SQUARE_SIZE: i32 = 600 / 8;

/// An input event, as translated by the front-end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Primary click at a pixel position.
    Click { x: i32, y: i32 },
    /// Switch between the two search algorithms.
    ToggleAlgorithm,
    /// Clear the selection and any computed path.
    Reset,
}

/// The visualizer model.
///
/// The first click places the knight, the second picks the target and runs
/// the search. Toggling the algorithm re-runs the search for the current
/// selection; the engine itself keeps no state between calls.
pub struct Model {
    field: PathField,
    knight: Knight,
    square: i32,
    algorithm: Algorithm,
    start: Option<Cell>,
    goal: Option<Cell>,
    path: Option<PathResult>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Board::STANDARD, SQUARE_SIZE)
    }
}

impl Model {
    /// Create a model for `board`, with squares `square` pixels wide.
    pub fn new(board: Board, square: i32) -> Self {
        Self {
            field: PathField::new(board),
            knight: Knight::new(board),
            square,
            algorithm: Algorithm::Guided,
            start: None,
            goal: None,
            path: None,
        }
    }

    /// Process one input event.
    pub fn update(&mut self, input: Input) {
        match input {
            Input::Click { x, y } => {
                let Some(cell) = self.field.board().cell_at(x, y, self.square) else {
                    return;
                };
                if self.start.is_none() {
                    self.start = Some(cell);
                } else if self.goal.is_none() {
                    self.goal = Some(cell);
                    self.recompute();
                }
                // Clicks after both squares are chosen are ignored until a
                // reset, as in the reference interaction.
            }
            Input::ToggleAlgorithm => {
                self.algorithm = self.algorithm.toggled();
                if self.start.is_some() && self.goal.is_some() {
                    self.recompute();
                }
            }
            Input::Reset => {
                self.start = None;
                self.goal = None;
                self.path = None;
            }
        }
    }

    fn recompute(&mut self) {
        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            return;
        };
        self.path = match self.field.path(&self.knight, start, goal, self.algorithm) {
            Ok(result) if result.reaches(goal) => {
                log::debug!(
                    "{:?} path {start} -> {goal}: {} moves",
                    self.algorithm,
                    result.cost
                );
                Some(result)
            }
            Ok(_) => {
                // Degenerate result: goal unreachable. Display nothing.
                log::warn!("no path {start} -> {goal}");
                None
            }
            Err(err) => {
                log::warn!("search rejected: {err}");
                None
            }
        };
    }

    /// The selected start square, if any.
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// The selected goal square, if any.
    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    /// The active search algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The last computed path, if a complete one exists.
    pub fn path(&self) -> Option<&PathResult> {
        self.path.as_ref()
    }

    /// The instruction or result line to display under the board.
    pub fn status(&self) -> String {
        match (&self.path, self.start) {
            (Some(result), _) => match self.algorithm {
                Algorithm::Guided => {
                    format!("A* Implementation Cost: {} moves", result.cost)
                }
                Algorithm::Uniform => {
                    format!("Dijkstra Implementation Cost: {} moves", result.cost)
                }
            },
            (None, Some(_)) => "Select another square to traverse to".to_owned(),
            (None, None) => "Select a square to place the knight".to_owned(),
        }
    }
}
