//! Per-tick simulation phases for the growing-circles system.
//!
//! The update loop runs, in this order:
//! 1. [`movement_phase`] — jitter velocities and move circles, bouncing off
//!    the world edges.
//! 2. [`growth_phase`] — grow every circle by a small random amount.
//! 3. [`overlap_phase`] — flag every pair of overlapping circles as reducing.
//! 4. [`shrink_phase`] — shrink reducing circles and respawn the ones whose
//!    radius went negative.
//!
//! Circles flagged as reducing are skipped by the first two phases, so a
//! circle frozen by a collision stays put until it has shrunk away.

use crate::{
    circle::{Circle, CircleSet, exceeds_boundary, random_sign},
    config::Config,
    types::CircleId,
};
use rand::Rng;

/// Moves every non-reducing circle by one tick.
///
/// For each circle not flagged as reducing:
///
/// 1. Each velocity component is nudged by `+accel` or `-accel`, the sign
///    drawn independently per axis.
/// 2. The velocity is added to the position.
/// 3. On each axis where the new coordinate is `<= 0` or `>= world_size`,
///    that velocity component is inverted.
///
/// Positions are not clamped, so a circle can end up past an edge by up to
/// one velocity step; the inverted velocity carries it back on later ticks.
///
/// ### Parameters
/// - `circles` - Circle set to update in place.
/// - `cfg` - Configuration providing the world extents.
/// - `rng` - Source of the acceleration signs.
pub fn movement_phase(circles: &mut CircleSet, cfg: &Config, rng: &mut impl Rng) {
    for c in circles.circles.iter_mut().filter(|c| !c.reducing) {
        c.vel.x += random_sign(rng) * c.accel;
        c.vel.y += random_sign(rng) * c.accel;

        c.pos += c.vel;

        if exceeds_boundary(c.pos.x, cfg.world_size.x) {
            c.vel.x = -c.vel.x;
        }
        if exceeds_boundary(c.pos.y, cfg.world_size.y) {
            c.vel.y = -c.vel.y;
        }
    }
}

/// Grows every non-reducing circle by a random amount in
/// `[0, cfg.max_growth)`. There is no upper limit on the radius.
pub fn growth_phase(circles: &mut CircleSet, cfg: &Config, rng: &mut impl Rng) {
    for c in circles.circles.iter_mut().filter(|c| !c.reducing) {
        c.radius += rng.random::<f32>() * cfg.max_growth;
    }
}

/// Flags both circles of every overlapping pair as reducing.
///
/// All unordered pairs are tested with [`Circle::overlaps`], which is
/// quadratic in the number of circles. Flags are only ever set here; a
/// circle stays flagged until [`shrink_phase`] replaces it.
///
/// ### Returns
/// The number of circles that were not reducing before this call and are
/// now.
pub fn overlap_phase(circles: &mut CircleSet) -> usize {
    let list = &mut circles.circles;
    let mut newly_flagged = 0;

    for i in 0..list.len() {
        for j in (i + 1)..list.len() {
            if !list[i].overlaps(&list[j]) {
                continue;
            }
            for k in [i, j] {
                if !list[k].reducing {
                    list[k].reducing = true;
                    newly_flagged += 1;
                }
            }
        }
    }
    newly_flagged
}

/// Shrinks reducing circles and respawns the ones that vanished.
///
/// Every reducing circle loses `cfg.shrink_step` of radius. If the radius
/// drops below zero, the slot is overwritten with a fresh circle from
/// [`Circle::spawn`] using `cfg.respawn_radius`, which discards the old
/// position and velocity and clears the reducing flag.
///
/// ### Returns
/// The ids of the slots that were respawned, in ascending order.
pub fn shrink_phase(circles: &mut CircleSet, cfg: &Config, rng: &mut impl Rng) -> Vec<CircleId> {
    let mut respawned = Vec::new();

    for (id, c) in circles.circles.iter_mut().enumerate() {
        if !c.reducing {
            continue;
        }

        c.radius -= cfg.shrink_step;
        if c.radius < 0.0 {
            *c = Circle::spawn(cfg.respawn_radius, cfg, rng);
            respawned.push(id);
        }
    }
    respawned
}
