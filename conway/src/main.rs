// main.rs - Conway's Game of Life on the `automaton` engine
//
// Loads an initial state from a text file and shows it in an egui window
// with step/play controls and a choice of fixed or periodic boundary.

use anyhow::{Context, anyhow};
use automaton::Grid;
use clap::Parser;
use eframe::egui;
use log::info;
use simple_logger::SimpleLogger;

mod config;
mod game;
mod history;
mod loader;
mod playback;
mod ui;

use config::Args;
use game::GameOfLife;
use playback::Playback;
use ui::ConwayApp;

/// Title of the window.
const TITLE: &str = "Conway's Game of Life";
/// Height reserved for the control panel under the grid.
const CONTROLS_HEIGHT: f32 = 80.0;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    SimpleLogger::new()
        .with_level(args.log_level())
        .env()
        .init()
        .context("initialising logger")?;
    info!("Starting conway v{} ...", env!("CARGO_PKG_VERSION"));

    let snapshot = loader::load(&args.init_file)
        .with_context(|| format!("loading initial state from {}", args.init_file.display()))?;
    let grid = Grid::from_snapshot(&snapshot).context("building grid")?;
    info!(
        "loaded {}x{} grid with {} live cells from {}",
        grid.rows(),
        grid.columns(),
        grid.population(),
        args.init_file.display(),
    );

    let cell_size = args.cell_size(grid.rows(), grid.columns());
    let pitch = cell_size + 1.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            (pitch * grid.columns() as f32 + 20.0).max(600.0),
            pitch * grid.rows() as f32 + CONTROLS_HEIGHT,
        ]),
        ..Default::default()
    };

    let game = GameOfLife::new(grid, args.boundary, args.stop_on_cycle);
    let runtime = tokio::runtime::Runtime::new().context("starting playback runtime")?;
    let speed = args.speed;

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc: &eframe::CreationContext<'_>| -> Box<dyn eframe::App> {
            let ctx = cc.egui_ctx.clone();
            let playback = Playback::spawn(runtime, speed, move || ctx.request_repaint());
            Box::new(ConwayApp::new(game, playback, cell_size))
        }),
    )
    .map_err(|err| anyhow!("{}", err))
}
