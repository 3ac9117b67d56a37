// cell.rs - A single binary-state grid element and a read-only view of it

use std::fmt;

use crate::grid::Grid;
use crate::rule::Rule;

/// A single cell of a [`Grid`].
///
/// Cells are created once per position when the grid is built and live as
/// long as the grid does. Position is fixed; state is freely mutable through
/// [`Grid::cell_mut`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    column: usize,
    state: bool,
}

impl Cell {
    pub(crate) fn new(row: usize, column: usize, state: bool) -> Self {
        Self { row, column, state }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    /// Flips the state, returning the new one.
    pub fn toggle(&mut self) -> bool {
        self.state = !self.state;
        self.state
    }
}

/// A cell together with a shared borrow of the grid that owns it.
///
/// This is what rules see. It can read the cell and resolve neighbours
/// (see the boundary policies in [`crate::boundary`]) but cannot write to
/// anything, so a rule evaluation always observes one consistent generation.
#[derive(Clone, Copy)]
pub struct CellRef<'a> {
    grid: &'a Grid,
    cell: &'a Cell,
}

impl<'a> CellRef<'a> {
    pub(crate) fn new(grid: &'a Grid, cell: &'a Cell) -> Self {
        Self { grid, cell }
    }

    pub fn row(&self) -> usize {
        self.cell.row
    }

    pub fn column(&self) -> usize {
        self.cell.column
    }

    pub fn state(&self) -> bool {
        self.cell.state
    }

    /// The grid this cell belongs to.
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Returns what `rule` computes as this cell's next state. Nothing is
    /// written back.
    pub fn accept<R: Rule + ?Sized>(&self, rule: &R) -> bool {
        rule.visit(*self)
    }
}

impl PartialEq for CellRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.grid, other.grid) && std::ptr::eq(self.cell, other.cell)
    }
}
impl Eq for CellRef<'_> {}

impl fmt::Debug for CellRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellRef")
            .field("row", &self.cell.row)
            .field("column", &self.cell.column)
            .field("state", &self.cell.state)
            .finish()
    }
}
