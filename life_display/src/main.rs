// main.rs - egui driver for the Game of Life core: fixed-rate stepping,
// click-to-reseed, cells drawn as filled rectangles

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use life::Grid;

const CELL_EDGE: f32 = 12.0;
const BOARD_WIDTH: f32 = 780.0;
const BOARD_HEIGHT: f32 = 600.0;

// 10 generations per second, low enough to avoid flickering
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([BOARD_WIDTH + 16.0, BOARD_HEIGHT + 60.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

struct LifeApp {
    grid: Grid,
    running: bool,
    last_update: Instant,
    generation: u32,
}

impl Default for LifeApp {
    fn default() -> Self {
        // Column and row counts come from the board size and the fixed
        // cell edge, and never change afterwards.
        Self {
            grid: Grid::new(
                (BOARD_WIDTH / CELL_EDGE) as usize,
                (BOARD_HEIGHT / CELL_EDGE) as usize,
            ),
            running: false,
            last_update: Instant::now(),
            generation: 0,
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.running && self.last_update.elapsed() >= TICK {
            self.grid.step();
            self.generation += 1;
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let columns = self.grid.columns();
            let rows = self.grid.rows();

            let total_size = Vec2::new(columns as f32 * CELL_EDGE, rows as f32 * CELL_EDGE);
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let start_pos = response.rect.min;

            for row in 0..rows {
                for column in 0..columns {
                    let rect = Rect::from_min_size(
                        egui::pos2(
                            start_pos.x + column as f32 * CELL_EDGE,
                            start_pos.y + row as f32 * CELL_EDGE,
                        ),
                        Vec2::splat(CELL_EDGE),
                    );

                    // Alive is black, dead is white
                    let fill = if self.grid.cell(column, row) {
                        Color32::BLACK
                    } else {
                        Color32::WHITE
                    };
                    painter.rect_filled(rect, 0.0, fill);
                    painter.rect_stroke(rect, 0.0, Stroke::new(0.5, Color32::BLACK));
                }
            }

            // Reseed the board on click
            if response.clicked() {
                self.grid.randomize();
                self.generation = 0;
                self.running = true;
                self.last_update = Instant::now();
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.generation));
                ui.label(format!("Live cells: {}", self.grid.live_count()));
                if !self.running {
                    ui.label("Click the board to seed it");
                }
            });
        });

        // Keep the animation ticking while running
        if self.running {
            ctx.request_repaint();
        }
    }
}
