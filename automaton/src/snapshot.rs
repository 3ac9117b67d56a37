// snapshot.rs - Plain boolean state matrix, detached from any grid

use std::fmt;

use crate::error::{AutomatonError, Result};

/// A rows×columns matrix of cell states.
///
/// Snapshots never alias a grid's cells: reading a grid's state, writing a
/// new state into it and evaluating a rule all go through fresh copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    rows: usize,
    columns: usize,
    states: Vec<bool>, // row-major
}

impl Snapshot {
    /// Creates an all-dead snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`.
    pub fn new(rows: usize, columns: usize) -> Self {
        let len = rows
            .checked_mul(columns)
            .unwrap_or_else(|| panic!("{rows}x{columns} snapshot overflows usize"));
        Self {
            rows,
            columns,
            states: vec![false; len],
        }
    }

    /// Builds a snapshot from nested rows, rejecting ragged input.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        let mut states = Vec::with_capacity(rows.len() * columns);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(AutomatonError::RaggedRows {
                    row: index,
                    len: row.len(),
                    expected: columns,
                });
            }
            states.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            states,
        })
    }

    /// Creates an all-dead snapshot with the given cells alive.
    ///
    /// Positions outside the matrix are ignored.
    pub fn with_live_cells(rows: usize, columns: usize, cells: &[(usize, usize)]) -> Self {
        let mut snapshot = Self::new(rows, columns);
        for &(row, column) in cells {
            snapshot.set(row, column, true);
        }
        snapshot
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the state at `(row, column)`, or `None` outside the matrix.
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        self.index(row, column).map(|i| self.states[i])
    }

    /// Sets the state at `(row, column)`. Returns `false` if the position is
    /// outside the matrix, in which case nothing is written.
    pub fn set(&mut self, row: usize, column: usize, state: bool) -> bool {
        match self.index(row, column) {
            Some(i) => {
                self.states[i] = state;
                true
            }
            None => false,
        }
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        // `chunks` panics on zero; a zero-column snapshot has no states anyway
        self.states.chunks(self.columns.max(1)).take(self.rows)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.states.iter().filter(|&&alive| alive).count()
    }

    pub(crate) fn states(&self) -> &[bool] {
        &self.states
    }

    pub(crate) fn from_states(rows: usize, columns: usize, states: Vec<bool>) -> Self {
        debug_assert_eq!(states.len(), rows * columns);
        Self {
            rows,
            columns,
            states,
        }
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }
}

/// '1' for alive and '0' for dead, rows separated by newlines with no
/// trailing newline.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                write!(f, "{}", if alive { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}
