// grid.rs - Fixed-size grid of cells for a binary cellular automaton

use std::fmt;

use log::{debug, trace};

use crate::cell::{Cell, CellRef};
use crate::error::{AutomatonError, Result};
use crate::rule::{Rule, evaluate};
use crate::snapshot::Snapshot;

/// A fixed-size rectangular cellular automaton.
///
/// Dimensions never change after construction and every in-bounds position
/// maps to the same [`Cell`] for the lifetime of the grid. Advancing a
/// generation is a two-step protocol: [`Grid::accept`] evaluates a rule
/// against the current state without touching it, then [`Grid::set_state`]
/// applies the result in one go. [`Grid::step`] does both.
///
/// ```
/// use automaton::{GameOfLifeFixed, Grid, Snapshot};
///
/// // blinker
/// let start = Snapshot::with_live_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]);
/// let mut grid = Grid::from_snapshot(&start).unwrap();
/// grid.step(&GameOfLifeFixed);
/// assert_eq!(
///     Snapshot::with_live_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]),
///     grid.state()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>, // row-major
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(AutomatonError::EmptyGrid { rows, columns });
        }
        if rows.checked_mul(columns).is_none() {
            return Err(AutomatonError::TooLarge { rows, columns });
        }
        let cells = (0..rows)
            .flat_map(|r| (0..columns).map(move |c| Cell::new(r, c, false)))
            .collect();
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Creates a grid sized and populated from `snapshot`.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        let mut grid = Self::new(snapshot.rows(), snapshot.columns())?;
        grid.set_state(snapshot)?;
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns a read-only view of the cell at `(row, column)`.
    ///
    /// Fails instead of clamping when the position is outside the grid;
    /// boundary-aware access goes through the neighbour lookups on
    /// [`CellRef`].
    pub fn cell(&self, row: usize, column: usize) -> Result<CellRef<'_>> {
        self.check_bounds(row, column)?;
        Ok(self.cell_ref(row, column))
    }

    /// Returns the cell at `(row, column)` for editing.
    pub fn cell_mut(&mut self, row: usize, column: usize) -> Result<&mut Cell> {
        self.check_bounds(row, column)?;
        let index = row * self.columns + column;
        Ok(&mut self.cells[index])
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellRef<'_>> {
        self.cells.iter().map(move |cell| CellRef::new(self, cell))
    }

    /// Copies the current state of every cell into a new snapshot.
    pub fn state(&self) -> Snapshot {
        let states = self.cells.iter().map(Cell::state).collect();
        Snapshot::from_states(self.rows, self.columns, states)
    }

    /// Overwrites every cell from `snapshot`, position for position.
    ///
    /// The snapshot must have the grid's exact dimensions; otherwise nothing
    /// is written.
    pub fn set_state(&mut self, snapshot: &Snapshot) -> Result<()> {
        if snapshot.rows() != self.rows || snapshot.columns() != self.columns {
            debug!(
                "rejecting {}x{} snapshot for {}x{} grid",
                snapshot.rows(),
                snapshot.columns(),
                self.rows,
                self.columns,
            );
            return Err(AutomatonError::DimensionMismatch {
                rows: self.rows,
                columns: self.columns,
                got_rows: snapshot.rows(),
                got_columns: snapshot.columns(),
            });
        }
        for (cell, &state) in self.cells.iter_mut().zip(snapshot.states()) {
            cell.set_state(state);
        }
        Ok(())
    }

    /// Evaluates `rule` over the whole grid and returns the next generation.
    /// The grid itself is left unchanged.
    pub fn accept<R: Rule + ?Sized>(&self, rule: &R) -> Snapshot {
        evaluate(rule, self)
    }

    /// Advances the grid by one generation under `rule`.
    pub fn step<R: Rule + ?Sized>(&mut self, rule: &R) {
        trace!("stepping {}x{} grid with {}", self.rows, self.columns, rule);
        let next = self.accept(rule);
        // `next` was built from this grid, so its dimensions always match
        for (cell, &state) in self.cells.iter_mut().zip(next.states()) {
            cell.set_state(state);
        }
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set_state(false);
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.state()).count()
    }

    pub(crate) fn cell_ref(&self, row: usize, column: usize) -> CellRef<'_> {
        CellRef::new(self, &self.cells[row * self.columns + column])
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<()> {
        if row < self.rows && column < self.columns {
            Ok(())
        } else {
            Err(AutomatonError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }
}

/// Same text form as [`Snapshot`]: '1'/'0' per cell, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % self.columns == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", if cell.state() { '1' } else { '0' })?;
        }
        Ok(())
    }
}
