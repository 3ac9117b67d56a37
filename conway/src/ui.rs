// ui.rs - egui front end: cell grid plus playback controls

use automaton::Boundary;
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use log::{info, warn};

use crate::game::GameOfLife;
use crate::playback::{MAX_SPEED, MIN_SPEED, Playback};

const SPACING: f32 = 1.0;
const LIVE_COLOR: Color32 = Color32::BLACK;
const DEAD_COLOR: Color32 = Color32::WHITE;

pub struct ConwayApp {
    game: GameOfLife,
    playback: Playback,
    cell_size: f32,
}

impl ConwayApp {
    pub fn new(game: GameOfLife, playback: Playback, cell_size: f32) -> Self {
        Self {
            game,
            playback,
            cell_size,
        }
    }

    /// Runs at most one generation per frame, when the ticker says one is due.
    fn run_due_generation(&mut self) {
        if self.playback.take_tick() && self.game.step() {
            info!("cycle detected, pausing");
            self.playback.set_playing(false);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let playing = self.playback.is_playing();

        ui.horizontal(|ui| {
            let button_text = if playing { "⏸ Pause" } else { "▶ Play" };
            if ui.button(button_text).clicked() {
                self.playback.set_playing(!playing);
            }

            if ui.add_enabled(!playing, egui::Button::new("Step")).clicked() {
                self.game.step();
            }

            ui.separator();

            // Rule dropdown, usable while playing
            let mut boundary = self.game.boundary();
            egui::ComboBox::from_id_source("boundary_selector")
                .selected_text(boundary_label(boundary))
                .show_ui(ui, |ui| {
                    for option in Boundary::ALL {
                        ui.selectable_value(&mut boundary, option, boundary_label(option));
                    }
                });
            self.game.set_boundary(boundary);

            ui.separator();

            ui.label("Speed:");
            let mut speed = self.playback.speed();
            if ui.add(egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED)).changed() {
                self.playback.set_speed(speed);
            }

            ui.separator();

            if ui.add_enabled(!playing, egui::Button::new("Clear")).clicked() {
                self.game.clear();
            }
        });

        // Statistics
        let grid = self.game.grid();
        let cells = grid.rows() * grid.columns();
        let live_cells = grid.population();
        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.game.generation()));
            ui.label(format!("Live cells: {}", live_cells));
            ui.label(format!(
                "Population: {:.1}%",
                live_cells as f32 / cells as f32 * 100.0
            ));
        });
    }

    fn cells(&mut self, ui: &mut egui::Ui) {
        let rows = self.game.grid().rows();
        let columns = self.game.grid().columns();
        let pitch = self.cell_size + SPACING;
        let total_size = Vec2::new(pitch * columns as f32, pitch * rows as f32);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::GRAY);
        for cell in self.game.grid().cells() {
            let min = origin + Vec2::new(cell.column() as f32 * pitch, cell.row() as f32 * pitch);
            let rect = Rect::from_min_size(min, Vec2::splat(self.cell_size));
            let color = if cell.state() { LIVE_COLOR } else { DEAD_COLOR };
            painter.rect_filled(rect, 0.0, color);
            painter.rect_stroke(rect, 0.0, Stroke::new(0.2, Color32::from_gray(60)));
        }

        // Editing is locked while playing
        if self.playback.is_playing() || !response.clicked() {
            return;
        }
        if let Some(pos) = response.interact_pointer_pos() {
            let offset = pos - origin;
            if offset.x < 0.0 || offset.y < 0.0 {
                return;
            }
            let row = (offset.y / pitch) as usize;
            let column = (offset.x / pitch) as usize;
            if let Err(err) = self.game.toggle_cell(row, column) {
                warn!("ignoring click: {}", err);
            }
        }
    }
}

impl eframe::App for ConwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_due_generation();

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.cells(ui);
            });
        });
    }
}

fn boundary_label(boundary: Boundary) -> &'static str {
    match boundary {
        Boundary::Fixed => "Fixed boundary",
        Boundary::Periodic => "Periodic boundary",
    }
}
