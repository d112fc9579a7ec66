//! Simulation tunables.
//!
//! Every behavioral constant lives in [`FlockConfig`] and is handed to the
//! simulation at construction time, so the core can be driven with varied
//! parameters in tests instead of reading module-level globals.

/// Tunable parameters for a flock.
///
/// The defaults reproduce the classic fishtank behavior: slow boids,
/// gentle forces, separation dominating alignment dominating cohesion.
///
/// ```ignore
/// let config = FlockConfig::default()
///     .with_max_speed(0.5)
///     .with_initial_count(250);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlockConfig {
    /// Speed ceiling enforced after every force application.
    pub max_speed: f64,
    /// Magnitude cap on each individual steering force.
    pub max_force: f64,
    /// Soft speed floor; nonzero velocities below this get rescaled up.
    pub min_speed: f64,
    /// Neighbors closer than this trigger the separation rule.
    pub desired_separation: f64,
    /// Neighbors closer than this participate in alignment and cohesion.
    pub neighbor_dist: f64,
    /// Weight applied to the separation steer.
    pub separation_weight: f64,
    /// Weight applied to the alignment steer.
    pub alignment_weight: f64,
    /// Weight applied to the cohesion steer.
    pub cohesion_weight: f64,
    /// Population created by bulk initialization.
    pub initial_count: u32,
    /// Half-range of each initial velocity component; spawned boids drift
    /// with components uniform in `[-spawn_drift, spawn_drift]`.
    pub spawn_drift: f64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            max_speed: 0.3,
            max_force: 0.03,
            min_speed: 0.05,
            desired_separation: 25.0,
            neighbor_dist: 50.0,
            separation_weight: 1.0,
            alignment_weight: 0.8,
            cohesion_weight: 0.6,
            initial_count: 100,
            spawn_drift: 0.15,
        }
    }
}

impl FlockConfig {
    /// Create a config with the default fishtank parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the speed ceiling.
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Set the per-force magnitude cap.
    pub fn with_max_force(mut self, max_force: f64) -> Self {
        self.max_force = max_force;
        self
    }

    /// Set the soft speed floor.
    pub fn with_min_speed(mut self, min_speed: f64) -> Self {
        self.min_speed = min_speed;
        self
    }

    /// Set the separation trigger distance.
    pub fn with_desired_separation(mut self, dist: f64) -> Self {
        self.desired_separation = dist;
        self
    }

    /// Set the alignment/cohesion neighborhood distance.
    pub fn with_neighbor_dist(mut self, dist: f64) -> Self {
        self.neighbor_dist = dist;
        self
    }

    /// Set the number of boids created by bulk initialization.
    pub fn with_initial_count(mut self, count: u32) -> Self {
        self.initial_count = count;
        self
    }

    /// Set the three rule weights at once, in separation/alignment/cohesion
    /// order.
    pub fn with_weights(mut self, separation: f64, alignment: f64, cohesion: f64) -> Self {
        self.separation_weight = separation;
        self.alignment_weight = alignment;
        self.cohesion_weight = cohesion;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tunables() {
        let config = FlockConfig::default();
        assert_eq!(config.max_speed, 0.3);
        assert_eq!(config.max_force, 0.03);
        assert_eq!(config.min_speed, 0.05);
        assert_eq!(config.desired_separation, 25.0);
        assert_eq!(config.neighbor_dist, 50.0);
        assert_eq!(config.separation_weight, 1.0);
        assert_eq!(config.alignment_weight, 0.8);
        assert_eq!(config.cohesion_weight, 0.6);
        assert_eq!(config.initial_count, 100);
        assert_eq!(config.spawn_drift, 0.15);
    }

    #[test]
    fn test_builder_chain() {
        let config = FlockConfig::new()
            .with_max_speed(1.0)
            .with_neighbor_dist(80.0)
            .with_weights(2.0, 1.0, 0.5);
        assert_eq!(config.max_speed, 1.0);
        assert_eq!(config.neighbor_dist, 80.0);
        assert_eq!(config.separation_weight, 2.0);
        assert_eq!(config.cohesion_weight, 0.5);
        // Untouched fields keep their defaults
        assert_eq!(config.max_force, 0.03);
    }
}
