use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Number of circles alive for the whole run.
    pub circle_count: usize,
    /// Radius of the circles created at startup.
    pub initial_radius: f32,
    /// Radius of a circle that replaces a shrunk-away one.
    pub respawn_radius: f32,
    /// Per-tick velocity nudge applied on each axis with a random sign.
    pub acceleration: f32,
    /// Exclusive upper bound of the per-tick radius growth.
    pub max_growth: f32,
    /// Radius lost per tick while a circle is reducing.
    pub shrink_step: f32,
    /// World extents; positions live in `[0, x) × [0, y)`.
    pub world_size: Vec2,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            circle_count: 1000,
            initial_radius: 5.0,
            respawn_radius: 1.0,
            acceleration: 0.01,
            max_growth: 0.05,
            shrink_step: 0.5,
            world_size: Vec2::new(1280.0 * 1.5, 960.0 * 1.5),
        }
    }
}
