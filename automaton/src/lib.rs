// lib.rs - Rule-pluggable binary cellular automata on a fixed-size grid
//
// A `Grid` holds the cells. A `Rule` computes a cell's next state from the
// current generation, reading neighbours through a `Boundary` policy.
// Advancing a generation evaluates the rule over the whole grid into a fresh
// `Snapshot` and then applies that snapshot in one replace, so updates are
// synchronous no matter how the rule is written.

pub mod boundary;
mod cell;
mod error;
mod grid;
mod life;
pub mod rule;
mod snapshot;

pub use boundary::{Boundary, Neighbour};
pub use cell::{Cell, CellRef};
pub use error::{AutomatonError, Result};
pub use grid::Grid;
pub use life::{GameOfLifeFixed, GameOfLifePeriodic, game_of_life};
pub use rule::{Rule, evaluate};
pub use snapshot::Snapshot;
