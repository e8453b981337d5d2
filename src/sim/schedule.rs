//! Phase shrink schedule
//!
//! An ordered, immutable list of radii, one per phase. Strict monotonic
//! decrease is enforced by [`SimConfig::validate`](crate::config::SimConfig)
//! before a schedule ever exists, so lookups here only defend against
//! out-of-range phase indices.

use serde::{Deserialize, Serialize};

/// Immutable per-phase radius table
///
/// Phases are 1-based: the first zone a player places is phase 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSchedule {
    radii: Vec<f32>,
}

impl PhaseSchedule {
    /// Build from already-validated radii
    ///
    /// Callers go through `SimConfig::validate`; this constructor only
    /// re-asserts the invariants it relies on.
    pub(crate) fn new(radii: Vec<f32>) -> Self {
        debug_assert!(!radii.is_empty());
        debug_assert!(radii.windows(2).all(|pair| pair[1] < pair[0]));
        Self { radii }
    }

    /// Highest phase index in the schedule (number of phases)
    #[inline]
    pub fn max_phase(&self) -> u32 {
        self.radii.len() as u32
    }

    /// Radius for a 1-based phase index
    ///
    /// Panics if `phase` is outside `[1, max_phase()]`; the state machine
    /// never requests one by construction, so a violation is a caller bug.
    pub fn radius_for_phase(&self, phase: u32) -> f32 {
        assert!(
            phase >= 1 && phase <= self.max_phase(),
            "phase {} outside schedule range [1, {}]",
            phase,
            self.max_phase()
        );
        self.radii[(phase - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_lookup() {
        let schedule = PhaseSchedule::new(vec![40.0, 26.0, 16.0]);
        assert_eq!(schedule.max_phase(), 3);
        assert_eq!(schedule.radius_for_phase(1), 40.0);
        assert_eq!(schedule.radius_for_phase(2), 26.0);
        assert_eq!(schedule.radius_for_phase(3), 16.0);
    }

    #[test]
    #[should_panic(expected = "outside schedule range")]
    fn test_phase_zero_panics() {
        PhaseSchedule::new(vec![40.0, 26.0]).radius_for_phase(0);
    }

    #[test]
    #[should_panic(expected = "outside schedule range")]
    fn test_phase_past_end_panics() {
        PhaseSchedule::new(vec![40.0, 26.0]).radius_for_phase(3);
    }
}
