//! The simulation loop: a growable flock advanced once per frame.
//!
//! [`Flock`] owns the boid population and the region bounds. One call to
//! [`Flock::step`] per frame walks the live sequence in insertion order,
//! updating each boid against the population's current state. Boids are
//! only ever appended, never removed, so indices stay stable for the whole
//! run.

use glam::DVec2;

use crate::boid::Boid;
use crate::config::FlockConfig;
use crate::spawn::SpawnContext;

/// The axis-aligned simulation bounds, `[0, width] x [0, height]`.
///
/// Resizable; a resize changes future wrap checks only and never moves
/// existing boids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub width: f64,
    pub height: f64,
}

/// A population of boids plus the region they live in.
pub struct Flock {
    boids: Vec<Boid>,
    region: Region,
    config: FlockConfig,
    spawn_ctx: SpawnContext,
}

impl Flock {
    /// Bulk initialization: `config.initial_count` boids at uniformly
    /// random positions within the region. Each run gets a different
    /// population; use [`Flock::new_seeded`] for a reproducible one.
    pub fn new(config: FlockConfig, width: f64, height: f64) -> Self {
        Self::from_context(config, width, height, SpawnContext::new())
    }

    /// Bulk initialization with a fixed seed: the initial population and
    /// every later [`spawn`](Self::spawn) are reproducible run to run.
    pub fn new_seeded(config: FlockConfig, width: f64, height: f64, seed: u64) -> Self {
        Self::from_context(config, width, height, SpawnContext::seeded(seed))
    }

    fn from_context(
        config: FlockConfig,
        width: f64,
        height: f64,
        mut spawn_ctx: SpawnContext,
    ) -> Self {
        let mut boids = Vec::with_capacity(config.initial_count as usize);
        for _ in 0..config.initial_count {
            let position = spawn_ctx.random_position(width, height);
            let velocity = spawn_ctx.drift_velocity(config.spawn_drift);
            boids.push(Boid::new(position, velocity, &config));
        }
        Self {
            boids,
            region: Region { width, height },
            config,
            spawn_ctx,
        }
    }

    /// An empty flock; useful for tests and custom population setups.
    pub fn empty(config: FlockConfig, width: f64, height: f64) -> Self {
        Self {
            boids: Vec::new(),
            region: Region { width, height },
            config,
            spawn_ctx: SpawnContext::new(),
        }
    }

    /// Append a boid at `(x, y)` with a randomized drift velocity.
    ///
    /// This is the pointer collaborator's entry point. Rate limiting is the
    /// caller's concern (see [`crate::spawn::SpawnLimiter`]); the flock
    /// itself accepts every request.
    pub fn spawn(&mut self, x: f64, y: f64) {
        let velocity = self.spawn_ctx.drift_velocity(self.config.spawn_drift);
        self.push(Boid::new(DVec2::new(x, y), velocity, &self.config));
    }

    /// Append a pre-built boid.
    pub fn push(&mut self, boid: Boid) {
        self.boids.push(boid);
    }

    /// Advance every boid one frame.
    ///
    /// Iterates the live sequence, not a snapshot: the length is re-read
    /// each pass, so a boid appended before the walk reaches its index is
    /// updated in the same frame it arrived. Each boid reads the
    /// population as it stands when its turn comes, meaning earlier boids
    /// have already moved this frame. Both behaviors are deliberate and
    /// match the reference simulation.
    pub fn step(&mut self) {
        let mut i = 0;
        while i < self.boids.len() {
            let mut boid = self.boids[i];
            boid.update(&self.boids, &self.config, self.region);
            self.boids[i] = boid;
            i += 1;
        }
    }

    /// Update the region bounds. Boids keep their positions; only future
    /// wrap checks see the new size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.region = Region { width, height };
    }

    /// The current population, in insertion order.
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    /// Current region bounds.
    pub fn region(&self) -> Region {
        self.region
    }

    /// The config this flock was built with.
    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    /// Population size.
    pub fn len(&self) -> usize {
        self.boids.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_init_population() {
        let config = FlockConfig::default();
        let flock = Flock::new_seeded(config, 300.0, 200.0, 1);
        assert_eq!(flock.len(), 100);
        for boid in flock.boids() {
            assert!(boid.position.x >= 0.0 && boid.position.x <= 300.0);
            assert!(boid.position.y >= 0.0 && boid.position.y <= 200.0);
            assert!(boid.velocity.x.abs() <= config.spawn_drift);
            assert!(boid.velocity.y.abs() <= config.spawn_drift);
        }
    }

    #[test]
    fn test_spawn_appends_at_coordinate() {
        let config = FlockConfig::default();
        let mut flock = Flock::empty(config, 100.0, 100.0);
        flock.spawn(30.0, 40.0);
        assert_eq!(flock.len(), 1);

        let boid = flock.boids()[0];
        assert_eq!(boid.position, DVec2::new(30.0, 40.0));
        assert!(boid.velocity.x.abs() <= config.spawn_drift);
        assert!(boid.velocity.y.abs() <= config.spawn_drift);
        assert_eq!(boid.max_speed, config.max_speed);
        assert_eq!(boid.max_force, config.max_force);
    }

    #[test]
    fn test_step_keeps_speed_and_wrap_invariants() {
        let config = FlockConfig::default();
        let mut flock = Flock::new_seeded(config.with_initial_count(30), 100.0, 100.0, 3);

        for _ in 0..50 {
            flock.step();
            for boid in flock.boids() {
                let speed = boid.velocity.length();
                // Post-update speed is either exactly zero or inside the
                // floor/ceiling band.
                assert!(speed <= config.max_speed + 1e-9);
                assert!(speed == 0.0 || speed >= config.min_speed - 1e-9);
                assert!(boid.position.x >= 0.0 && boid.position.x <= 100.0);
                assert!(boid.position.y >= 0.0 && boid.position.y <= 100.0);
            }
        }
    }

    #[test]
    fn test_neighbors_move_apart() {
        // Two resting boids within separation range drift apart after a
        // step; the steers are not exactly opposite once velocities differ,
        // but both point away from the other boid.
        let config = FlockConfig::default();
        let mut flock = Flock::empty(config, 100.0, 100.0);
        flock.push(Boid::new(DVec2::new(40.0, 50.0), DVec2::ZERO, &config));
        flock.push(Boid::new(DVec2::new(50.0, 50.0), DVec2::ZERO, &config));

        flock.step();

        let a = flock.boids()[0];
        let b = flock.boids()[1];
        assert!(a.velocity.x < 0.0);
        assert!(b.velocity.x > 0.0);
        assert!(a.position.x < 40.0);
        assert!(b.position.x > 50.0);
    }

    #[test]
    fn test_appended_boid_updated_same_frame() {
        // A boid appended before step() runs is part of the live walk and
        // gets its velocity clamped into the floor/ceiling band like any
        // other member.
        let config = FlockConfig::default();
        let mut flock = Flock::empty(config, 200.0, 200.0);
        flock.push(Boid::new(DVec2::new(100.0, 100.0), DVec2::new(0.01, 0.0), &config));

        flock.step();

        let boid = flock.boids()[0];
        // 0.01 is below the floor; one update raises it.
        assert!((boid.velocity.length() - config.min_speed).abs() < 1e-9);
        assert!(boid.position.x > 100.0);
    }

    #[test]
    fn test_resize_does_not_reposition() {
        let config = FlockConfig::default().with_max_speed(10.0);
        let mut flock = Flock::empty(config, 100.0, 100.0);
        flock.push(Boid::new(DVec2::new(95.0, 50.0), DVec2::new(6.0, 0.0), &config));

        flock.resize(50.0, 50.0);
        // Shrinking the region leaves the out-of-bounds boid where it is.
        assert_eq!(flock.boids()[0].position, DVec2::new(95.0, 50.0));

        // The next step wraps against the new bounds: 95 + 6 = 101 > 50.
        flock.step();
        assert_eq!(flock.boids()[0].position.x, 0.0);
    }

    #[test]
    fn test_same_seed_same_population() {
        // A fixed seed covers bulk initialization, not just later spawns:
        // two flocks built with the same seed are identical boid for boid,
        // before and after a pointer spawn.
        let config = FlockConfig::default().with_initial_count(20);
        let mut a = Flock::new_seeded(config, 300.0, 200.0, 7);
        let mut b = Flock::new_seeded(config, 300.0, 200.0, 7);

        a.spawn(10.0, 10.0);
        b.spawn(10.0, 10.0);

        assert_eq!(a.len(), b.len());
        for (x, y) in a.boids().iter().zip(b.boids()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.velocity, y.velocity);
        }
    }

    #[test]
    fn test_population_monotonic() {
        let config = FlockConfig::default();
        let mut flock = Flock::new_seeded(config.with_initial_count(5), 100.0, 100.0, 4);
        flock.step();
        flock.spawn(10.0, 10.0);
        flock.step();
        flock.spawn(20.0, 20.0);
        assert_eq!(flock.len(), 7);
    }
}
