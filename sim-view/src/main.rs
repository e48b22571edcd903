//! Application entry point for the growing-circles viewer.
//!
//! This binary sets up logging and eframe/egui and delegates the
//! per-frame stepping and drawing to [`Viewer`] from the `viewer` module.

mod viewer;

use sim_core::config::Config;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// The simulation seed is drawn once here and logged, so a run can be
/// replayed with `Simulation::new(Config::default(), seed)`.
///
/// ### Returns
/// - `Ok(())` if the window is closed normally.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let cfg = Config::default();
    let seed: u64 = rand::random();
    log::info!(
        "starting with {} circles in a {}x{} world (seed {seed})",
        cfg.circle_count,
        cfg.world_size.x,
        cfg.world_size.y
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cfg.world_size.x, cfg.world_size.y])
            .with_title("Growing Circles"),
        ..Default::default()
    };

    eframe::run_native(
        "Growing Circles",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cfg, seed)))),
    )
    .inspect_err(|e| log::error!("failed to run viewer: {e}"))
}
