// config.rs - Command-line configuration

use std::path::PathBuf;

use automaton::Boundary;
use clap::Parser;
use log::LevelFilter;

use crate::playback::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

/// Width, in pixels, shared out among the cells of the longer grid side
/// when no cell size is given.
const GRID_PIXELS: f32 = 800.0;

/// Conway's Game of Life.
#[derive(Debug, Parser)]
#[command(name = "conway", version, about)]
pub struct Args {
    /// Text file with the initial state: a `<rows> <columns>` line, then
    /// optionally one line of 0/1 characters per row.
    pub init_file: PathBuf,

    /// Boundary condition to start with (`fixed` or `periodic`).
    #[arg(short, long, default_value_t = Boundary::Fixed)]
    pub boundary: Boundary,

    /// Playback speed; generations are 3000/SPEED ms apart.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SPEED,
        value_parser = clap::value_parser!(u32).range(MIN_SPEED as i64..=MAX_SPEED as i64),
    )]
    pub speed: u32,

    /// Side length of a cell in pixels [default: 800 / max(rows, columns)].
    #[arg(long)]
    pub cell_size: Option<f32>,

    /// Pause playback when a generation repeats one of the last 10.
    #[arg(long)]
    pub stop_on_cycle: bool,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Cell size to draw a `rows`×`columns` grid with.
    pub fn cell_size(&self, rows: usize, columns: usize) -> f32 {
        self.cell_size
            .filter(|&size| size > 0.0)
            .unwrap_or_else(|| (GRID_PIXELS / rows.max(columns).max(1) as f32).max(1.0))
    }
}
