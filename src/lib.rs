//! Zone Sim - a phased zone-shrink simulator
//!
//! Models the shrinking circular "safe zone" of a battle-royale match as a
//! sequence of nested circles on a normalized map plane. Core modules:
//! - `sim`: Deterministic simulation (schedule, zone geometry, state machine)
//! - `config`: Construction-time configuration and validation
//!
//! The crate emits circle geometry only; rendering and input belong to the
//! host. All randomness flows through a seeded PRNG so runs are reproducible.

pub mod config;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use sim::{SimPhase, Zone, ZoneSimulator};

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Map coordinate bounds (percent of map width/height)
    pub const MAP_MIN: f32 = 0.0;
    pub const MAP_MAX: f32 = 100.0;

    /// Default shrink schedule: radius per phase, percent of map width
    pub const DEFAULT_PHASE_RADII: [f32; 9] = [40.0, 26.0, 16.0, 10.0, 6.0, 3.0, 1.5, 0.5, 0.1];

    /// Default autoplay tick interval
    pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1000;

    /// Maximum autoplay catch-up ticks per update, prevents runaway advancement
    /// when the host stalls and delivers a huge dt
    pub const MAX_CATCHUP_TICKS: u32 = 8;
}

/// Offset `origin` by `distance` along `angle` (radians)
#[inline]
pub fn offset_polar(origin: Vec2, distance: f32, angle: f32) -> Vec2 {
    origin + Vec2::new(distance * angle.cos(), distance * angle.sin())
}
