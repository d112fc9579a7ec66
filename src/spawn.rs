//! Spawn helpers: randomized boid creation and pointer rate limiting.

use std::time::{Duration, Instant};

use glam::DVec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Randomness source for boid creation.
///
/// Owns a small fast RNG seeded from wall-clock time so each run gets a
/// different flock.
#[derive(Debug)]
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a context seeded from the current time.
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::seeded(seed)
    }

    /// Create a context with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniformly random point inside a `width x height` region.
    pub fn random_position(&mut self, width: f64, height: f64) -> DVec2 {
        DVec2::new(
            self.rng.gen::<f64>() * width,
            self.rng.gen::<f64>() * height,
        )
    }

    /// Initial drift velocity: each component uniform in
    /// `[-half_range, half_range]`.
    pub fn drift_velocity(&mut self, half_range: f64) -> DVec2 {
        DVec2::new(
            (self.rng.gen::<f64>() - 0.5) * 2.0 * half_range,
            (self.rng.gen::<f64>() - 0.5) * 2.0 * half_range,
        )
    }
}

impl Default for SpawnContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock rate limiter for pointer-driven spawning.
///
/// The pointer collaborator may request a spawn on every cursor event; this
/// gate admits at most one per interval (16 ms by default, roughly one per
/// frame at 60 Hz).
#[derive(Debug)]
pub struct SpawnLimiter {
    min_interval: Duration,
    last_spawn: Option<Instant>,
}

impl SpawnLimiter {
    /// Limiter admitting one spawn per 16 ms.
    pub fn new() -> Self {
        Self::with_interval(Duration::from_millis(16))
    }

    /// Limiter with a custom minimum interval.
    pub fn with_interval(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_spawn: None,
        }
    }

    /// Returns true (and arms the cooldown) if a spawn is admissible at
    /// `now`. The first request always passes.
    pub fn admit(&mut self, now: Instant) -> bool {
        match self.last_spawn {
            Some(last) if now.duration_since(last) < self.min_interval => false,
            _ => {
                self.last_spawn = Some(now);
                true
            }
        }
    }
}

impl Default for SpawnLimiter {
    fn default() -> Self {
        Self::new()
    }
}
