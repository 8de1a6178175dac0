// ui.rs - egui front end: controls, cell painting and pointer seeding

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use life_core::{
    CellPainter, LifeConfig, PointerMapper, Simulation, SystemClock, render, seeded_rng,
};
use tracing::{debug, warn};

/// Window state around a [`Simulation`] sized to the central panel.
pub struct LifeApp {
    config: LifeConfig,
    sim: Option<Simulation>, // created on the first frame, once the panel size is known

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl LifeApp {
    pub fn new(config: LifeConfig) -> Self {
        Self {
            config,
            sim: None,
            is_running: true,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(16),
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
        }
    }

    /// Creates the simulation, or resets it when the panel changes cell count.
    fn fit_to(&mut self, size: Vec2) {
        if let Some(sim) = self.sim.as_mut() {
            if let Err(err) = sim.fit_viewport(size.x, size.y) {
                debug!(%err, "keeping previous grid");
            }
            return;
        }

        let rng = seeded_rng(self.config.rng_seed);
        match Simulation::for_viewport(self.config.clone(), size.x, size.y, rng, SystemClock) {
            Ok(sim) => self.sim = Some(sim),
            Err(err) => debug!(%err, "panel too small for a grid"),
        }
    }
}

/// Paints cells as filled squares with a thin outline.
struct EguiCells<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    resolution: f32,
    live: Color32,
    dead: Color32,
}

impl CellPainter for EguiCells<'_> {
    fn paint(&mut self, col: usize, row: usize, alive: bool) {
        let rect = Rect::from_min_size(
            self.origin + Vec2::new(col as f32, row as f32) * self.resolution,
            Vec2::splat(self.resolution),
        );
        let cell_color = if alive { self.live } else { self.dead };
        self.painter.rect_filled(rect, 0.0, cell_color);
        self.painter.rect_stroke(rect, 0.0, Stroke::new(0.5, Color32::from_gray(60)));
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if let Some(sim) = self.sim.as_mut() {
                    if ui.button("⟲ Restart").clicked() {
                        sim.restart();
                    }
                    if !self.is_running && ui.button("⏭ Step").clicked() {
                        sim.tick();
                    }

                    ui.separator();
                    ui.label(format!("Generation: {}", sim.generation()));
                    ui.label(format!("Live cells: {}", sim.grid().live_count()));
                    ui.label(format!("Restarts: {}", sim.restarts()));
                    let monitor = sim.monitor();
                    ui.label(format!("History: {}/{}", monitor.len(), monitor.max_history()));
                }

                ui.separator();

                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });
        });

        let background = self.dead_color;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(background))
            .show(ctx, |ui| {
                let size = ui.available_size();
                self.fit_to(size);

                let (live, dead) = (self.live_color, self.dead_color);
                let Some(sim) = self.sim.as_mut() else {
                    ui.label("Window is too small for a single cell");
                    return;
                };

                let resolution = sim.config().resolution;
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
                let origin = response.rect.min;

                // Draw the current generation before advancing
                render(
                    sim.grid(),
                    &mut EguiCells { painter: &painter, origin, resolution, live, dead },
                );

                // Clicks and taps both arrive as pointer clicks
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let mapper = PointerMapper::unscaled(
                            (origin.x, origin.y),
                            (response.rect.width(), response.rect.height()),
                            resolution,
                        );
                        let (cols, rows) = sim.grid().dimensions();
                        if let Some((col, row)) = mapper.cell_at(pos.x, pos.y, cols, rows) {
                            if let Err(err) = sim.seed_at(col, row) {
                                warn!(%err, "seed rejected");
                            }
                        }
                    }
                }

                if self.is_running && self.last_update.elapsed() >= self.update_interval {
                    let report = sim.tick();
                    if report.restarted {
                        debug!(restarts = sim.restarts(), "stagnation restart");
                    }
                    self.last_update = Instant::now();
                }
            });

        // Keep animating while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
