// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};
use ultraviolet::{Vec2, Vec3};

// ====================
// Simulation Parameters
// ====================
/// Fixed physics step per tick, in simulation seconds.
pub const DEFAULT_TIME_STEP: f32 = 0.02;
/// Hard admission cap on concurrently simulated particles.
pub const MAX_PARTICLES: usize = 5000;
/// Default shared trail cap, in points per particle.
pub const DEFAULT_TRAIL_LENGTH: usize = 100;

// ====================
// Domain
// ====================
/// Default visible domain extents (viewport units).
pub const DEFAULT_DOMAIN_WIDTH: f32 = 800.0;
pub const DEFAULT_DOMAIN_HEIGHT: f32 = 600.0;
/// Margin factor on the removal region beyond the visible domain.
pub const BOUNDS_MARGIN: f32 = 1.5;

// ====================
// Threading/Parallelism
// ====================
pub const MIN_THREADS: usize = 3; // Minimum number of threads to use
pub const THREADS_LEAVE_FREE: usize = 2; // Number of logical cores to leave free

// ====================
// Diagnostics
// ====================
/// Sliding window of tick timings kept for the published stats.
pub const TICK_STATS_WINDOW: usize = 120;

/// Runtime configuration, owned by the simulation and mutated only through
/// commands. Read once at the top of each tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Uniform E field, physics coordinates (+y up). Never time-varying.
    pub electric_field: Vec2,
    /// Static B vector, or the amplitude vector when `magnetic_frequency`
    /// is positive.
    pub magnetic_field: Vec3,
    /// Oscillation frequency in Hz. Zero or negative means a static field.
    pub magnetic_frequency: f32,
    /// Shared trail cap, applied lazily to each particle on update.
    pub max_trail_length: usize,
    pub domain_width: f32,
    pub domain_height: f32,
    pub bounds_margin: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            electric_field: Vec2::zero(),
            magnetic_field: Vec3::zero(),
            magnetic_frequency: 0.0,
            max_trail_length: DEFAULT_TRAIL_LENGTH,
            domain_width: DEFAULT_DOMAIN_WIDTH,
            domain_height: DEFAULT_DOMAIN_HEIGHT,
            bounds_margin: BOUNDS_MARGIN,
        }
    }
}

impl SimConfig {
    pub fn domain(&self) -> Domain {
        Domain {
            width: self.domain_width,
            height: self.domain_height,
            margin: self.bounds_margin,
        }
    }
}

/// Removal region for the boundary check. The visible domain spans
/// `[0, width] x [0, height]`; a particle survives while it stays inside
/// `[-width*(margin-1), width*margin]` on x and the equivalent on y. The
/// depth axis is unbounded.
#[derive(Clone, Copy, Debug)]
pub struct Domain {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Domain {
    pub fn contains(&self, pos: Vec3) -> bool {
        pos.x >= -self.width * (self.margin - 1.0)
            && pos.x <= self.width * self.margin
            && pos.y >= -self.height * (self.margin - 1.0)
            && pos.y <= self.height * self.margin
    }
}
