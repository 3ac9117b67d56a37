use automaton::{Boundary, GameOfLifeFixed, GameOfLifePeriodic, Grid, Rule, Snapshot, game_of_life};
use proptest::prelude::*;

fn grid_with(rows: usize, columns: usize, cells: &[(usize, usize)]) -> Grid {
    Grid::from_snapshot(&Snapshot::with_live_cells(rows, columns, cells)).unwrap()
}

fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    (1..12_usize, 1..12_usize).prop_flat_map(|(rows, columns)| {
        proptest::collection::vec(proptest::collection::vec(any::<bool>(), columns), rows)
            .prop_map(|rows| Snapshot::from_rows(&rows).unwrap())
    })
}

#[test]
fn test_block_is_still() {
    let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
    for boundary in Boundary::ALL {
        let mut grid = grid_with(6, 6, &block);
        let before = grid.state();
        grid.step(game_of_life(boundary));
        assert_eq!(before, grid.state(), "{boundary}");
    }
}

#[test]
fn test_blinker_has_period_two() {
    let row = grid_with(7, 7, &[(3, 2), (3, 3), (3, 4)]).state();
    let column = grid_with(7, 7, &[(2, 3), (3, 3), (4, 3)]).state();

    let mut grid = Grid::from_snapshot(&row).unwrap();
    grid.step(&GameOfLifeFixed);
    assert_eq!(column, grid.state());
    grid.step(&GameOfLifeFixed);
    assert_eq!(row, grid.state());
}

#[test]
fn test_lonely_cells_die() {
    let mut grid = grid_with(5, 5, &[(2, 2)]);
    grid.step(&GameOfLifeFixed);
    assert_eq!(0, grid.population());

    let mut grid = grid_with(5, 5, &[(2, 1), (2, 2)]);
    grid.step(&GameOfLifeFixed);
    assert_eq!(0, grid.population());
}

#[test]
fn test_dead_grid_stays_dead() {
    for boundary in Boundary::ALL {
        let mut grid = Grid::new(8, 5).unwrap();
        for _ in 0..10 {
            grid.step(game_of_life(boundary));
        }
        assert_eq!(Snapshot::new(8, 5), grid.state());
    }
}

#[test]
fn test_glider_moves_diagonally() {
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    let mut grid = grid_with(10, 10, &glider);
    for _ in 0..4 {
        grid.step(&GameOfLifeFixed);
    }
    let moved: Vec<_> = glider.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(Snapshot::with_live_cells(10, 10, &moved), grid.state());
}

#[test]
fn test_glider_wraps_on_a_torus() {
    // After 4 * 6 generations a glider on a 6x6 torus is back where it began.
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    let mut grid = grid_with(6, 6, &glider);
    let start = grid.state();
    for _ in 0..24 {
        grid.step(&GameOfLifePeriodic);
        assert_eq!(5, grid.population());
    }
    assert_eq!(start, grid.state());
}

#[test]
fn test_periodic_and_fixed_diverge_at_the_edge() {
    // Vertical blinker on the left edge. With a fixed boundary it becomes a
    // 2-cell row that dies out; on a torus it turns into a full 3-cell row
    // wrapping to the right edge.
    let grid = grid_with(5, 5, &[(1, 0), (2, 0), (3, 0)]);
    let fixed = grid.accept(&GameOfLifeFixed);
    let periodic = grid.accept(&GameOfLifePeriodic);
    assert_ne!(fixed, periodic);
    assert_eq!(Snapshot::with_live_cells(5, 5, &[(2, 0), (2, 1)]), fixed);
    assert_eq!(Snapshot::with_live_cells(5, 5, &[(2, 4), (2, 0), (2, 1)]), periodic);
}

#[test]
fn test_rule_can_change_between_generations() {
    let start = grid_with(5, 5, &[(1, 0), (2, 0), (3, 0)]);

    // periodic twice: the edge blinker oscillates through the wrapped row
    let mut grid = start.clone();
    let rules: [&dyn Rule; 2] = [&GameOfLifePeriodic, &GameOfLifePeriodic];
    for rule in rules {
        grid.step(rule);
    }
    assert_eq!(start.state(), grid.state());

    // periodic then fixed: the wrapped row is split by the dead boundary
    let mut grid = start.clone();
    let rules: [&dyn Rule; 2] = [&GameOfLifePeriodic, &GameOfLifeFixed];
    grid.step(rules[0]);
    assert_eq!("00000\n00000\n11001\n00000\n00000", grid.to_string());
    grid.step(rules[1]);
    assert_eq!(0, grid.population());
}

proptest! {
    #[test]
    fn test_accept_does_not_mutate(snapshot in arb_snapshot()) {
        let grid = Grid::from_snapshot(&snapshot).unwrap();
        for boundary in Boundary::ALL {
            let next = grid.accept(game_of_life(boundary));
            prop_assert_eq!(&snapshot, &grid.state());
            prop_assert_eq!((snapshot.rows(), snapshot.columns()), (next.rows(), next.columns()));
        }
    }

    #[test]
    fn test_step_is_accept_then_set_state(snapshot in arb_snapshot()) {
        for boundary in Boundary::ALL {
            let rule = game_of_life(boundary);
            let mut stepped = Grid::from_snapshot(&snapshot).unwrap();
            stepped.step(rule);
            let mut applied = Grid::from_snapshot(&snapshot).unwrap();
            let next = applied.accept(rule);
            applied.set_state(&next).unwrap();
            prop_assert_eq!(stepped.state(), applied.state());
        }
    }
}
