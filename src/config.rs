//! Simulation configuration
//!
//! Supplied once at construction; validated into an immutable
//! [`PhaseSchedule`](crate::sim::PhaseSchedule) before any simulation runs.
//! A bad schedule is a programmer/configuration error and fails fast here,
//! never per-call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_PHASE_RADII, DEFAULT_TICK_INTERVAL_MS};
use crate::sim::PhaseSchedule;

/// Configuration rejected at construction time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("phase schedule is empty")]
    EmptySchedule,
    #[error("phase {phase} radius {radius} is not positive")]
    NonPositiveRadius { phase: u32, radius: f32 },
    #[error("phase {phase} radius {radius} does not shrink from {previous}")]
    NonDecreasingRadius {
        phase: u32,
        radius: f32,
        previous: f32,
    },
    #[error("tick interval must be positive")]
    ZeroTickInterval,
}

/// Simulator configuration: shrink schedule plus autoplay cadence
///
/// Different maps may carry different schedules; the default schedule is
/// shared by all maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Radius per phase, percent of map width, strictly decreasing
    pub phase_radii: Vec<f32>,
    /// Autoplay tick interval in milliseconds
    pub tick_interval_ms: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            phase_radii: DEFAULT_PHASE_RADII.to_vec(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl SimConfig {
    /// Validate into an immutable schedule
    ///
    /// Radii must be non-empty, positive, and strictly decreasing; the tick
    /// interval must be nonzero.
    pub fn validate(&self) -> Result<PhaseSchedule, ConfigError> {
        if self.phase_radii.is_empty() {
            return Err(ConfigError::EmptySchedule);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        for (i, &radius) in self.phase_radii.iter().enumerate() {
            let phase = i as u32 + 1;
            if radius <= 0.0 || !radius.is_finite() {
                return Err(ConfigError::NonPositiveRadius { phase, radius });
            }
            if i > 0 {
                let previous = self.phase_radii[i - 1];
                if radius >= previous {
                    return Err(ConfigError::NonDecreasingRadius {
                        phase,
                        radius,
                        previous,
                    });
                }
            }
        }
        Ok(PhaseSchedule::new(self.phase_radii.clone()))
    }

    /// Tick interval as seconds, for the autoplay accumulator
    pub fn tick_interval_secs(&self) -> f32 {
        self.tick_interval_ms as f32 / 1000.0
    }
}
