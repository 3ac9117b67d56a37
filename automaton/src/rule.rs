// rule.rs - Transition rules and whole-grid evaluation

use std::fmt;

use crate::cell::CellRef;
use crate::grid::Grid;
use crate::snapshot::Snapshot;

/// A per-cell transition function for a binary cellular automaton.
///
/// `visit` must be a pure function of the cell's position and the current
/// states of the cell and whatever neighbours it reads. [`CellRef`] only
/// offers read access, so a rule cannot corrupt the generation it is
/// evaluating.
pub trait Rule: fmt::Debug + fmt::Display + Send + Sync {
    /// Returns the next state of `cell`.
    fn visit(&self, cell: CellRef<'_>) -> bool;
}

impl<R: Rule + ?Sized> Rule for &R {
    fn visit(&self, cell: CellRef<'_>) -> bool {
        (**self).visit(cell)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn visit(&self, cell: CellRef<'_>) -> bool {
        (**self).visit(cell)
    }
}

/// Evaluates `rule` at every cell of `grid` and collects the results, in
/// row-major order, into a fresh snapshot.
///
/// Every evaluation reads the same unmodified generation, so the order of
/// visits does not affect the result.
pub fn evaluate<R: Rule + ?Sized>(rule: &R, grid: &Grid) -> Snapshot {
    let states = grid.cells().map(|cell| cell.accept(rule)).collect();
    Snapshot::from_states(grid.rows(), grid.columns(), states)
}
