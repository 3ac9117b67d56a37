// life.rs - Conway's Game of Life with fixed and periodic boundaries

use std::fmt;

use crate::boundary::Boundary;
use crate::cell::CellRef;
use crate::rule::Rule;

/// Game of Life on a grid surrounded by dead cells.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GameOfLifeFixed;

/// Game of Life on a torus.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GameOfLifePeriodic;

impl Rule for GameOfLifeFixed {
    fn visit(&self, cell: CellRef<'_>) -> bool {
        next_state(cell, Boundary::Fixed)
    }
}

impl Rule for GameOfLifePeriodic {
    fn visit(&self, cell: CellRef<'_>) -> bool {
        next_state(cell, Boundary::Periodic)
    }
}

impl fmt::Display for GameOfLifeFixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game of Life (fixed boundary)")
    }
}

impl fmt::Display for GameOfLifePeriodic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game of Life (periodic boundary)")
    }
}

/// Returns the Game of Life variant for `boundary`.
pub fn game_of_life(boundary: Boundary) -> &'static dyn Rule {
    match boundary {
        Boundary::Fixed => &GameOfLifeFixed,
        Boundary::Periodic => &GameOfLifePeriodic,
    }
}

fn next_state(cell: CellRef<'_>, boundary: Boundary) -> bool {
    // Count live neighbors
    let mut count = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if (dr, dc) != (0, 0) && boundary.resolve(cell, dr, dc).state() {
                count += 1;
            }
        }
    }

    match (cell.state(), count) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}
