// boundary.rs - Boundary-aware neighbour resolution
//
// Rules look at neighbours through a `CellRef` using one of two policies:
//
// - fixed: the grid is surrounded by permanently dead cells. Any lookup that
//   leaves the grid resolves to `Neighbour::Boundary`.
// - periodic: the grid wraps around at every edge (a torus), so every lookup
//   lands on a real cell.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellRef;
use crate::error::AutomatonError;

/// Boundary condition used to resolve neighbours outside the grid.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Dead cells beyond every edge.
    #[default]
    Fixed,
    /// Toroidal wraparound.
    Periodic,
}

impl Boundary {
    pub const ALL: [Boundary; 2] = [Boundary::Fixed, Boundary::Periodic];

    /// Resolves the neighbour of `cell` at the relative offset `(dr, dc)`.
    pub fn resolve<'a>(self, cell: CellRef<'a>, dr: isize, dc: isize) -> Neighbour<'a> {
        match self {
            Boundary::Fixed => cell.neighbour_fixed(dr, dc),
            Boundary::Periodic => Neighbour::Cell(cell.neighbour_periodic(dr, dc)),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Fixed => write!(f, "fixed"),
            Boundary::Periodic => write!(f, "periodic"),
        }
    }
}

impl FromStr for Boundary {
    type Err = AutomatonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Boundary::Fixed),
            "periodic" => Ok(Boundary::Periodic),
            _ => Err(AutomatonError::UnknownBoundary),
        }
    }
}

/// Result of a neighbour lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbour<'a> {
    /// A real cell of the grid.
    Cell(CellRef<'a>),
    /// The shared dead cell beyond a fixed boundary. It has no position and
    /// cannot be written to.
    Boundary,
}

impl<'a> Neighbour<'a> {
    /// State of the neighbour; the boundary is always dead.
    pub fn state(&self) -> bool {
        match self {
            Neighbour::Cell(cell) => cell.state(),
            Neighbour::Boundary => false,
        }
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, Neighbour::Boundary)
    }

    pub fn cell(&self) -> Option<CellRef<'a>> {
        match self {
            Neighbour::Cell(cell) => Some(*cell),
            Neighbour::Boundary => None,
        }
    }
}

impl<'a> CellRef<'a> {
    /// Returns the cell at relative offset `(dr, dc)`, or
    /// [`Neighbour::Boundary`] if that position is outside the grid.
    pub fn neighbour_fixed(&self, dr: isize, dc: isize) -> Neighbour<'a> {
        let grid = self.grid();
        let row = self.row().checked_add_signed(dr).filter(|&r| r < grid.rows());
        let column = self
            .column()
            .checked_add_signed(dc)
            .filter(|&c| c < grid.columns());
        match (row, column) {
            (Some(r), Some(c)) => Neighbour::Cell(grid.cell_ref(r, c)),
            _ => Neighbour::Boundary,
        }
    }

    /// Returns the cell at relative offset `(dr, dc)`, wrapping around the
    /// grid's edges in both directions.
    pub fn neighbour_periodic(&self, dr: isize, dc: isize) -> CellRef<'a> {
        let grid = self.grid();
        let r = wrap(self.row(), dr, grid.rows());
        let c = wrap(self.column(), dc, grid.columns());
        grid.cell_ref(r, c)
    }
}

/// `(index + offset) mod len`, normalised into `0..len`.
fn wrap(index: usize, offset: isize, len: usize) -> usize {
    // reduce the offset first so the sum cannot overflow
    let offset = offset.rem_euclid(len as isize) as usize;
    (index + offset) % len
}
