//! Growing-circles viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Simulation`] and
//! implements [`eframe::App`] as the frame driver: every frame it advances
//! the simulation by one tick and then paints the circles.

use eframe::App;
use glam::Vec2;
use sim_core::{config::Config, simulation::Simulation, types::CircleId};

/// Main application state for the viewer.
///
/// ### Fields
/// - `sim` - The simulation being shown.
/// - `last_respawned` - Slots respawned in the last tick (for highlighting).
/// - `last_step_time` - Time stamp of the last step (egui time).
/// - `last_step_dt` - Actual time delta between the last two steps.
pub struct Viewer {
    sim: Simulation,
    last_respawned: Vec<CircleId>,
    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a viewer around a fresh simulation.
    ///
    /// ### Parameters
    /// - `cfg` - Simulation constants; fixed for the whole run.
    /// - `seed` - Seed for the simulation's random number generator.
    pub fn new(cfg: Config, seed: u64) -> Self {
        Self {
            sim: Simulation::new(cfg, seed),
            last_respawned: Vec::new(),
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    /// Advances the simulation by a single tick at egui time `now`.
    fn step_once(&mut self, now: f64) {
        if self.last_step_time > 0.0 {
            self.last_step_dt = now - self.last_step_time;
        }
        self.last_respawned = self.sim.step().respawned;
        self.last_step_time = now;
    }

    /// Uniform world-to-screen scale that fits the whole world into `rect`.
    fn scale(&self, rect: egui::Rect) -> f32 {
        let world = self.sim.config().world_size;
        (rect.width() / world.x).min(rect.height() / world.y)
    }

    /// Converts a world-space position to screen-space.
    ///
    /// The world keeps its aspect ratio and is centered inside `rect`, with
    /// any leftover space on the longer axis left empty. Like a screen, the
    /// y-axis points down.
    ///
    /// ### Parameters
    /// - `p` - World-space position.
    /// - `rect` - Screen-space rectangle representing the drawing area.
    ///
    /// ### Returns
    /// The corresponding egui position in screen-space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let world = self.sim.config().world_size;
        let scale = self.scale(rect);
        let margin = (rect.size() - egui::vec2(world.x, world.y) * scale) * 0.5;
        rect.min + margin + egui::vec2(p.x, p.y) * scale
    }

    /// Paints every circle as a filled disc.
    ///
    /// Reducing circles are drawn red and circles respawned in the last
    /// tick green.
    fn draw_circles(&self, painter: &egui::Painter, rect: egui::Rect) {
        let scale = self.scale(rect);

        for (i, c) in self.sim.circles.circles.iter().enumerate() {
            let p = self.world_to_screen(c.pos, rect);
            let color = if c.reducing {
                egui::Color32::LIGHT_RED
            } else if self.last_respawned.contains(&i) {
                egui::Color32::LIGHT_GREEN
            } else {
                egui::Color32::WHITE
            };

            painter.circle_filled(p, c.radius * scale, color);
        }
    }

    /// Draws the TPS/FPS readout in the top-left corner.
    fn draw_debug_text(&self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        let frame_dt = ctx.input(|i| i.stable_dt) as f64;
        let tps = if self.last_step_dt > 0.0 {
            1.0 / self.last_step_dt
        } else {
            0.0
        };
        let fps = if frame_dt > 0.0 { 1.0 / frame_dt } else { 0.0 };

        painter.text(
            rect.min + egui::vec2(4.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!(
                "TPS: {tps:0.2}\nFPS: {fps:0.2}\ntick: {}\nreducing: {}",
                self.sim.tick(),
                self.sim.circles.reducing_count()
            ),
            egui::FontId::monospace(12.0),
            egui::Color32::WHITE,
        );
    }
}

impl App for Viewer {
    /// eframe callback: advance one tick, then render the current state.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.step_once(now);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                self.draw_circles(&painter, rect);
                self.draw_debug_text(ctx, &painter, rect);
            });

        ctx.request_repaint();
    }
}
