//! Tick driver that owns the circles and the random number generator.

use crate::{
    circle::CircleSet,
    config::Config,
    phases::{growth_phase, movement_phase, overlap_phase, shrink_phase},
    types::CircleId,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// What happened during a single [`Simulation::step`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Circles that started reducing this tick.
    pub newly_reducing: usize,
    /// Slots that were respawned this tick.
    pub respawned: Vec<CircleId>,
}

/// A fixed-size population of circles advanced one tick at a time.
///
/// The generator is seeded once in [`Simulation::new`]; two simulations
/// built from the same config and seed evolve identically.
#[derive(Debug)]
pub struct Simulation {
    pub circles: CircleSet,
    cfg: Config,
    rng: Pcg32,
    seed: u64,
    tick: u64,
}

impl Simulation {
    pub fn new(cfg: Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let circles = CircleSet::random(&cfg, &mut rng);
        log::debug!(
            "spawned {} circles of radius {} (seed {seed})",
            circles.len(),
            cfg.initial_radius
        );

        Self {
            circles,
            cfg,
            rng,
            seed,
            tick: 0,
        }
    }

    /// Wraps an existing set of circles, e.g. a hand-placed scenario.
    pub fn from_circles(cfg: Config, circles: CircleSet, seed: u64) -> Self {
        Self {
            circles,
            cfg,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            tick: 0,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// The phases run in a fixed order: movement, growth, overlap, shrink.
    /// A circle can therefore still move and grow in the tick it gets
    /// flagged, and is already shrunk once by the end of that same tick.
    pub fn step(&mut self) -> StepReport {
        movement_phase(&mut self.circles, &self.cfg, &mut self.rng);
        growth_phase(&mut self.circles, &self.cfg, &mut self.rng);
        let newly_reducing = overlap_phase(&mut self.circles);
        let respawned = shrink_phase(&mut self.circles, &self.cfg, &mut self.rng);

        self.tick += 1;
        log::trace!(
            "tick {}: {} newly reducing, {} respawned",
            self.tick,
            newly_reducing,
            respawned.len()
        );

        StepReport {
            newly_reducing,
            respawned,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}
