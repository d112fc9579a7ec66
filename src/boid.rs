//! The per-boid steering algorithm.
//!
//! Each boid owns its position, velocity, and speed/force limits, and knows
//! how to steer itself relative to the rest of the population. One call to
//! [`Boid::update`] per frame computes the three flocking steers against the
//! current population, applies them in a fixed order, integrates position,
//! and wraps it back into the region.
//!
//! The rule order is load-bearing: separation, then alignment, then
//! cohesion, with the speed ceiling and floor re-applied after each force.
//! Later forces therefore act on an already-clamped velocity, not on the
//! raw sum, and reordering changes the emergent motion.

use glam::DVec2;

use crate::config::FlockConfig;
use crate::simulation::Region;

/// A single flocking agent.
#[derive(Clone, Copy, Debug)]
pub struct Boid {
    /// Location within `[0, width] x [0, height]`.
    pub position: DVec2,
    /// Current motion vector, bounded to `[0, max_speed]` after every update.
    pub velocity: DVec2,
    /// Per-boid speed ceiling (uniform across the population).
    pub max_speed: f64,
    /// Per-boid steering force cap (uniform across the population).
    pub max_force: f64,
}

impl Boid {
    /// Create a boid at `position` with the given initial velocity.
    ///
    /// Initial velocity is the one speed not subject to the ceiling/floor;
    /// clamping starts with the first `update`.
    pub fn new(position: DVec2, velocity: DVec2, config: &FlockConfig) -> Self {
        Self {
            position,
            velocity,
            max_speed: config.max_speed,
            max_force: config.max_force,
        }
    }

    /// Advance this boid one frame against the current population.
    ///
    /// `flock` may contain this boid itself; the zero-distance check
    /// excludes it from every neighbor sum.
    pub fn update(&mut self, flock: &[Boid], config: &FlockConfig, region: Region) {
        let separation = self.separate(flock, config) * config.separation_weight;
        let alignment = self.align(flock, config) * config.alignment_weight;
        let cohesion = self.cohesion(flock, config) * config.cohesion_weight;

        self.apply_force(separation, config);
        self.apply_force(alignment, config);
        self.apply_force(cohesion, config);

        self.position += self.velocity;
        self.wrap(region);
    }

    /// Steer away from neighbors closer than `desired_separation`.
    ///
    /// Accumulates a unit vector away from each close neighbor, averages
    /// over the neighbor count, and converts the average into a
    /// desired-velocity steer. Returns zero when nothing is in range.
    pub fn separate(&self, flock: &[Boid], config: &FlockConfig) -> DVec2 {
        let mut steer = DVec2::ZERO;
        let mut count = 0u32;

        for other in flock {
            let d = self.position.distance(other.position);
            if d > 0.0 && d < config.desired_separation {
                steer += (self.position - other.position) / d;
                count += 1;
            }
        }

        if count > 0 {
            steer /= count as f64;
            steer = steer.normalize_or_zero() * self.max_speed - self.velocity;
            steer = steer.clamp_length_max(self.max_force);
        }

        steer
    }

    /// Steer toward the average velocity of neighbors within
    /// `neighbor_dist`. Returns zero when nothing is in range.
    pub fn align(&self, flock: &[Boid], config: &FlockConfig) -> DVec2 {
        let mut sum = DVec2::ZERO;
        let mut count = 0u32;

        for other in flock {
            let d = self.position.distance(other.position);
            if d > 0.0 && d < config.neighbor_dist {
                sum += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            sum /= count as f64;
            let steer = sum.normalize_or_zero() * self.max_speed - self.velocity;
            steer.clamp_length_max(self.max_force)
        } else {
            DVec2::ZERO
        }
    }

    /// Steer toward the centroid of neighbors within `neighbor_dist`.
    /// Returns zero when nothing is in range.
    pub fn cohesion(&self, flock: &[Boid], config: &FlockConfig) -> DVec2 {
        let mut sum = DVec2::ZERO;
        let mut count = 0u32;

        for other in flock {
            let d = self.position.distance(other.position);
            if d > 0.0 && d < config.neighbor_dist {
                sum += other.position;
                count += 1;
            }
        }

        if count > 0 {
            self.seek(sum / count as f64)
        } else {
            DVec2::ZERO
        }
    }

    /// Steer toward a target point at full speed, clipped to `max_force`.
    pub fn seek(&self, target: DVec2) -> DVec2 {
        let desired = (target - self.position).normalize_or_zero() * self.max_speed;
        (desired - self.velocity).clamp_length_max(self.max_force)
    }

    /// Add a force to velocity, then enforce the speed ceiling and floor.
    ///
    /// The speed is measured once, before either branch. The ceiling and
    /// floor are sequential checks against that one measurement, not a
    /// fixpoint; with a sane config (`min_speed < max_speed`) at most one
    /// branch fires. A zero-speed velocity passes through untouched.
    pub fn apply_force(&mut self, force: DVec2, config: &FlockConfig) {
        self.velocity += force;

        let speed = self.velocity.length();
        if speed > self.max_speed {
            self.velocity = (self.velocity / speed) * self.max_speed;
        }
        if speed < config.min_speed && speed > 0.0 {
            self.velocity = (self.velocity / speed) * config.min_speed;
        }
    }

    /// Teleport a position past one edge to the opposite edge.
    ///
    /// Wrap, not clamp: a boid leaving through `x > width` reappears at
    /// `x = 0`, with velocity untouched. One check per side suffices since
    /// per-frame displacement is bounded by `max_speed`.
    pub fn wrap(&mut self, region: Region) {
        if self.position.x < 0.0 {
            self.position.x = region.width;
        }
        if self.position.x > region.width {
            self.position.x = 0.0;
        }
        if self.position.y < 0.0 {
            self.position.y = region.height;
        }
        if self.position.y > region.height {
            self.position.y = 0.0;
        }
    }

    /// Heading angle in radians, `atan2(vy, vx)`.
    ///
    /// This plus `position` is everything a renderer needs; marker shape
    /// and color stay on the render side.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.velocity.y.atan2(self.velocity.x)
    }
}
