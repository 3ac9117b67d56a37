// error.rs - Error types for grid construction and access

use thiserror::Error;

/// Result type returned by fallible grid operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;

/// Precondition violations reported by the automaton core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A grid needs at least one row and one column.
    #[error("grid dimensions must be non-zero, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    /// `rows * columns` does not fit in `usize`.
    #[error("{rows}x{columns} grid is too large")]
    TooLarge { rows: usize, columns: usize },

    /// Direct cell access outside the grid.
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// A snapshot was applied to a grid of a different size.
    #[error("snapshot is {got_rows}x{got_columns} but the grid is {rows}x{columns}")]
    DimensionMismatch {
        rows: usize,
        columns: usize,
        got_rows: usize,
        got_columns: usize,
    },

    /// Rows of different lengths handed to `Snapshot::from_rows`.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },

    /// Unknown boundary policy name.
    #[error("unknown boundary policy (expected `fixed` or `periodic`)")]
    UnknownBoundary,
}
