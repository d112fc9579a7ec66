//! # flock2d - Emergent 2D boids flocking
//!
//! A fishtank of autonomous agents steering by three classic rules:
//! separation, alignment, and cohesion. The flock advances once per
//! animation frame over a population that only ever grows.
//!
//! ## Quick Start
//!
//! ```ignore
//! use flock2d::prelude::*;
//!
//! fn main() {
//!     flock2d::run(FlockConfig::default()).unwrap();
//! }
//! ```
//!
//! Or drive the simulation headlessly:
//!
//! ```ignore
//! use flock2d::prelude::*;
//!
//! let mut flock = Flock::new(FlockConfig::default(), 640.0, 480.0);
//! for _ in 0..600 {
//!     flock.step();
//! }
//! for boid in flock.boids() {
//!     println!("{} @ {:.1}", boid.heading(), boid.position);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Boids
//!
//! Each [`Boid`] owns its position, velocity, and speed/force limits. Every
//! frame it scans the whole population (exhaustive pairwise, by design; no
//! spatial grid), composes three weighted steering forces, and integrates
//! its own motion. Positions wrap at the region edges.
//!
//! ### The flock
//!
//! [`Flock`] owns the growable population and the region bounds. `step()`
//! walks the live sequence in insertion order; boids appended by the spawn
//! collaborator before the walk reaches them move the same frame.
//!
//! ### Collaborators
//!
//! Rendering ([`Renderer`]), pointer-driven spawning ([`input::Pointer`] +
//! [`SpawnLimiter`]), and window resizing live outside the core: the
//! simulation exposes only positions and heading angles and accepts
//! `spawn(x, y)` / `resize(w, h)` calls.

mod boid;
mod config;
mod error;
pub mod input;
mod render;
mod simulation;
pub mod spawn;
pub mod time;
mod window;

pub use boid::Boid;
pub use config::FlockConfig;
pub use error::{GpuError, RunError};
pub use glam::DVec2;
pub use render::{BoidInstance, DisplayMode, Renderer};
pub use simulation::{Flock, Region};
pub use spawn::{SpawnContext, SpawnLimiter};
pub use window::run;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::input::Pointer;
    pub use crate::run;
    pub use crate::time::Time;
    pub use crate::{Boid, DVec2, DisplayMode, Flock, FlockConfig, Region, SpawnLimiter};
}
