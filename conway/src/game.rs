// game.rs - Game state behind the UI: grid, current rule, generation count

use automaton::{Boundary, Grid, Rule, game_of_life};
use log::{debug, info};

use crate::history::CycleDetector;

pub struct GameOfLife {
    grid: Grid,
    boundary: Boundary,
    generation: u64,
    history: Option<CycleDetector>, // only with --stop-on-cycle
}

impl GameOfLife {
    pub fn new(grid: Grid, boundary: Boundary, stop_on_cycle: bool) -> Self {
        let history = stop_on_cycle.then(|| CycleDetector::new(&grid.state()));
        Self {
            grid,
            boundary,
            generation: 0,
            history,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// The rule applied by the next step.
    pub fn rule(&self) -> &'static dyn Rule {
        game_of_life(self.boundary)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_boundary(&mut self, boundary: Boundary) {
        if boundary != self.boundary {
            self.boundary = boundary;
            info!("rule changed to {}", self.rule());
            self.reset_history();
        }
    }

    /// Advances one generation. Returns `true` if cycle detection is on and
    /// the new generation repeats a recent one.
    pub fn step(&mut self) -> bool {
        self.grid.step(self.rule());
        self.generation += 1;
        debug!(
            "generation {}: {} live cells",
            self.generation,
            self.grid.population()
        );

        let Some(history) = self.history.as_mut() else {
            return false;
        };
        let repeated = history.record(&self.grid.state());
        if repeated {
            info!("generation {} repeats a recent generation", self.generation);
        }
        repeated
    }

    /// Kills every cell and restarts the generation count.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.reset_history();
    }

    /// Flips the cell at `(row, column)`, returning its new state.
    pub fn toggle_cell(&mut self, row: usize, column: usize) -> automaton::Result<bool> {
        let alive = self.grid.cell_mut(row, column)?.toggle();
        self.reset_history();
        Ok(alive)
    }

    fn reset_history(&mut self) {
        if let Some(history) = &mut self.history {
            history.reset(&self.grid.state());
        }
    }
}

#[cfg(test)]
mod tests {
    use automaton::Snapshot;

    use super::*;

    fn game(cells: &[(usize, usize)], boundary: Boundary, stop_on_cycle: bool) -> GameOfLife {
        let grid = Grid::from_snapshot(&Snapshot::with_live_cells(5, 5, cells)).unwrap();
        GameOfLife::new(grid, boundary, stop_on_cycle)
    }

    #[test]
    fn test_step_counts_generations() {
        let mut game = game(&[(2, 1), (2, 2), (2, 3)], Boundary::Fixed, false);
        assert!(!game.step());
        assert_eq!(1, game.generation());
        assert_eq!("00000\n00100\n00100\n00100\n00000", game.grid().to_string());
        // without cycle detection a repeat goes unreported
        assert!(!game.step());
        assert_eq!(2, game.generation());
    }

    #[test]
    fn test_cycle_detection() {
        let mut game = game(&[(2, 1), (2, 2), (2, 3)], Boundary::Fixed, true);
        assert!(!game.step());
        assert!(game.step());
    }

    #[test]
    fn test_edits_reset_cycle_history() {
        let mut game = game(&[(2, 1), (2, 2), (2, 3)], Boundary::Fixed, true);
        assert!(!game.step());
        assert!(game.toggle_cell(0, 0).unwrap());
        assert!(!game.toggle_cell(0, 0).unwrap());
        // history now only holds the vertical blinker
        assert!(!game.step());
        assert!(game.step());
    }

    #[test]
    fn test_boundary_switch_changes_rule() {
        let mut game = game(&[(1, 0), (2, 0), (3, 0)], Boundary::Fixed, false);
        game.set_boundary(Boundary::Periodic);
        assert_eq!(Boundary::Periodic, game.boundary());
        assert_eq!(automaton::GameOfLifePeriodic.to_string(), game.rule().to_string());
        game.step();
        assert_eq!(3, game.grid().population());
    }

    #[test]
    fn test_clear() {
        let mut game = game(&[(0, 0), (4, 4)], Boundary::Periodic, false);
        game.step();
        game.clear();
        assert_eq!(0, game.generation());
        assert_eq!(0, game.grid().population());
        assert!(game.toggle_cell(5, 0).is_err());
    }
}
