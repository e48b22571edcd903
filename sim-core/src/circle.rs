use crate::config::Config;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub accel: f32,
    /// Set once the circle has touched another one; it then stops moving and
    /// growing and shrinks until it is respawned.
    pub reducing: bool,
}

#[derive(Debug)]
pub struct CircleSet {
    pub circles: Vec<Circle>,
}

/// Returns `-1.0` or `1.0` with equal probability.
#[inline]
pub fn random_sign(rng: &mut impl Rng) -> f32 {
    if rng.random_bool(0.5) { -1.0 } else { 1.0 }
}

/// Returns `true` if `val` lies outside the open range `(0, bound)`.
///
/// Both ends count as outside, so a coordinate sitting exactly on `0` or on
/// `bound` triggers a bounce.
#[inline]
pub fn exceeds_boundary(val: f32, bound: f32) -> bool {
    val >= bound || val <= 0.0
}

impl Circle {
    /// Spawns a circle with the given radius at a random position inside
    /// `cfg.world_size`.
    ///
    /// Each velocity component gets a magnitude in `[0, 1)` and an
    /// independent random sign. The circle starts out not reducing.
    pub fn spawn(radius: f32, cfg: &Config, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(
            rng.random::<f32>() * cfg.world_size.x,
            rng.random::<f32>() * cfg.world_size.y,
        );
        let vel = Vec2::new(
            rng.random::<f32>() * random_sign(rng),
            rng.random::<f32>() * random_sign(rng),
        );

        Self {
            pos,
            vel,
            radius,
            accel: cfg.acceleration,
            reducing: false,
        }
    }

    /// Returns `true` if the two discs overlap.
    ///
    /// Touching discs (distance equal to the radius sum) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }
}

impl CircleSet {
    pub fn from_circles(circles: Vec<Circle>) -> Self {
        Self { circles }
    }

    /// Spawns `cfg.circle_count` circles of `cfg.initial_radius`.
    pub fn random(cfg: &Config, rng: &mut impl Rng) -> Self {
        let circles = (0..cfg.circle_count)
            .map(|_| Circle::spawn(cfg.initial_radius, cfg, rng))
            .collect();

        Self { circles }
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn reducing_count(&self) -> usize {
        self.circles.iter().filter(|c| c.reducing).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn at(x: f32, y: f32, radius: f32) -> Circle {
        Circle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius,
            accel: 0.01,
            reducing: false,
        }
    }

    #[test]
    fn exceeds_boundary_is_inclusive_at_both_ends() {
        assert!(exceeds_boundary(0.0, 10.0));
        assert!(exceeds_boundary(-0.1, 10.0));
        assert!(exceeds_boundary(10.0, 10.0));
        assert!(exceeds_boundary(12.0, 10.0));
        assert!(!exceeds_boundary(0.001, 10.0));
        assert!(!exceeds_boundary(9.999, 10.0));
    }

    #[test]
    fn random_sign_yields_both_signs() {
        let mut rng = Pcg32::seed_from_u64(7);
        let signs: Vec<f32> = (0..200).map(|_| random_sign(&mut rng)).collect();

        assert!(signs.iter().all(|&s| s == 1.0 || s == -1.0));
        assert!(signs.contains(&1.0));
        assert!(signs.contains(&-1.0));
    }

    #[test]
    fn spawn_places_circle_inside_world_with_fresh_state() {
        let cfg = Config::default();
        let mut rng = Pcg32::seed_from_u64(1);

        for _ in 0..500 {
            let c = Circle::spawn(cfg.respawn_radius, &cfg, &mut rng);
            assert!(c.pos.x >= 0.0 && c.pos.x < cfg.world_size.x);
            assert!(c.pos.y >= 0.0 && c.pos.y < cfg.world_size.y);
            assert!(c.vel.x.abs() < 1.0 && c.vel.y.abs() < 1.0);
            assert_eq!(c.radius, cfg.respawn_radius);
            assert_eq!(c.accel, 0.01);
            assert!(!c.reducing);
        }
    }

    #[test]
    fn overlaps_uses_strict_radius_sum() {
        let a = at(0.0, 0.0, 5.0);
        let touching = at(10.0, 0.0, 5.0);
        let inside = at(9.0, 0.0, 5.0);
        let coincident = at(0.0, 0.0, 5.0);

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(a.overlaps(&coincident));
    }

    #[test]
    fn random_set_has_configured_count_and_radius() {
        let cfg = Config {
            circle_count: 37,
            ..Config::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let set = CircleSet::random(&cfg, &mut rng);

        assert_eq!(set.len(), 37);
        assert!(set.circles.iter().all(|c| c.radius == cfg.initial_radius));
        assert_eq!(set.reducing_count(), 0);
    }
}
