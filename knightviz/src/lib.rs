//! Application model for the knight shortest-path visualizer.
//!
//! This crate owns the interaction state — selected start and goal squares,
//! the active search algorithm, the last computed path, and the status line
//! — and re-runs the engine whenever the selection or algorithm changes.
//! It performs no drawing: a front-end feeds it [`Input`] events and renders
//! from its accessors.

pub mod model;

pub use model::{Input, Model, SQUARE_SIZE};
