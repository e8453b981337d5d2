//! Simulation state machine
//!
//! Owns the zone run, the seeded RNG, and the autoplay scheduler, and is the
//! only component allowed to mutate any of them. Transitions outside their
//! legal state are silent no-ops, matching the tolerant UI the simulator
//! drives (clicks on the map after placement are simply ignored).
//!
//! The current phase is always derived from the run length, never stored,
//! so the two cannot drift apart.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::autoplay::Autoplay;
use super::schedule::PhaseSchedule;
use super::successor::generate_successor;
use super::zone::{Zone, ZoneRun};
use crate::config::{ConfigError, SimConfig};

/// Where the simulation sits in its lifecycle; derived, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    /// No zone placed yet
    Uninitialized,
    /// At least one zone placed, schedule not exhausted
    Active,
    /// Final phase reached; only reset remains
    Terminal,
}

/// The zone-shrink simulator
///
/// Same config and seed always reproduce the same zone sequence.
#[derive(Debug, Clone)]
pub struct ZoneSimulator {
    seed: u64,
    rng: Pcg32,
    schedule: PhaseSchedule,
    run: ZoneRun,
    autoplay: Autoplay,
}

impl ZoneSimulator {
    /// Build a simulator from a validated config and a run seed
    pub fn new(config: &SimConfig, seed: u64) -> Result<Self, ConfigError> {
        let schedule = config.validate()?;
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            schedule,
            run: ZoneRun::new(),
            autoplay: Autoplay::new(config.tick_interval_secs()),
        })
    }

    /// Current phase: number of zones generated so far (0 = nothing placed)
    #[inline]
    pub fn current_phase(&self) -> u32 {
        self.run.len()
    }

    /// All zones generated this session, oldest first
    pub fn zones(&self) -> &[Zone] {
        self.run.as_slice()
    }

    pub fn is_terminal(&self) -> bool {
        self.state() == SimPhase::Terminal
    }

    pub fn state(&self) -> SimPhase {
        let phase = self.current_phase();
        if phase == 0 {
            SimPhase::Uninitialized
        } else if phase < self.schedule.max_phase() {
            SimPhase::Active
        } else {
            SimPhase::Terminal
        }
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Place the phase-1 zone at `(x, y)` (percent coordinates)
    ///
    /// Only legal before any zone exists; otherwise the input is ignored.
    pub fn place_initial_zone(&mut self, x: f32, y: f32) {
        if self.state() != SimPhase::Uninitialized {
            return;
        }
        let radius = self.schedule.radius_for_phase(1);
        let zone = Zone::new(Vec2::new(x, y), radius, 1);
        log::info!("Phase 1 zone placed at ({x:.1}, {y:.1}), radius {radius}");
        self.run.append(zone);
    }

    /// Generate the next zone inside the current one
    ///
    /// No-op unless Active. Reaching the last schedule entry transitions to
    /// Terminal and stops autoplay.
    pub fn advance(&mut self) {
        if self.state() != SimPhase::Active {
            return;
        }
        let next_phase = self.current_phase() + 1;
        let next_radius = self.schedule.radius_for_phase(next_phase);
        // Active guarantees the run is non-empty
        let parent = *self.run.last().unwrap();
        let zone = generate_successor(&parent, next_radius, &mut self.rng);
        log::debug!(
            "Phase {next_phase} zone at ({:.1}, {:.1}), radius {next_radius}",
            zone.center.x,
            zone.center.y
        );
        self.run.append(zone);

        if self.state() == SimPhase::Terminal {
            log::info!("Terminal phase {} reached", self.current_phase());
            self.autoplay.stop();
        }
    }

    /// Wipe the run, stop autoplay, and return to Uninitialized; always legal
    pub fn reset(&mut self) {
        if !self.run.is_empty() {
            log::info!("Simulation reset after phase {}", self.current_phase());
        }
        self.autoplay.stop();
        self.run.clear();
    }

    /// Begin automatic advancement; no-op unless Active
    pub fn start_autoplay(&mut self) {
        if self.state() != SimPhase::Active {
            return;
        }
        self.autoplay.start();
    }

    /// Stop automatic advancement; idempotent, always legal
    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Feed elapsed wall-clock time to the autoplay scheduler
    ///
    /// Fires one `advance` per elapsed tick interval, re-checking state
    /// before each so a tick landing after Terminal or a reset does nothing.
    pub fn update(&mut self, dt_secs: f32) {
        let ticks = self.autoplay.drain_ticks(dt_secs);
        for _ in 0..ticks {
            if self.state() != SimPhase::Active {
                self.autoplay.stop();
                break;
            }
            self.advance();
        }
    }
}
