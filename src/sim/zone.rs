//! Zone geometry and the per-session zone sequence
//!
//! A zone is one circle on the normalized map plane: center in percent
//! coordinates, radius in percent of map width. Zones are immutable once
//! appended; the run only ever grows by one zone per legal transition and is
//! wiped as a whole on reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One generated safe zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Center on the map plane, each axis nominally in [0, 100]
    pub center: Vec2,
    /// Radius, percent of map width
    pub radius: f32,
    /// 1-based schedule index that produced this zone
    pub phase: u32,
}

impl Zone {
    pub fn new(center: Vec2, radius: f32, phase: u32) -> Self {
        Self {
            center,
            radius,
            phase,
        }
    }

    /// True if `other` lies entirely within this zone (with tolerance `eps`)
    pub fn contains(&self, other: &Zone, eps: f32) -> bool {
        self.center.distance(other.center) + other.radius <= self.radius + eps
    }
}

/// Append-only sequence of zones for one simulation session
///
/// Pure ordered container: validation is the successor generator's and state
/// machine's job. Owned exclusively by the state machine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneRun {
    zones: Vec<Zone>,
}

impl ZoneRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    /// Most recently appended zone, if any
    pub fn last(&self) -> Option<&Zone> {
        self.zones.last()
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    /// Number of zones generated so far; doubles as the current phase
    pub fn len(&self) -> u32 {
        self.zones.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn as_slice(&self) -> &[Zone] {
        &self.zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containment_check() {
        let parent = Zone::new(Vec2::new(50.0, 50.0), 40.0, 1);
        let inside = Zone::new(Vec2::new(60.0, 50.0), 26.0, 2);
        let outside = Zone::new(Vec2::new(70.0, 50.0), 26.0, 2);
        assert!(parent.contains(&inside, 1e-4));
        assert!(!parent.contains(&outside, 1e-4));
    }

    #[test]
    fn test_run_append_last_clear() {
        let mut run = ZoneRun::new();
        assert!(run.is_empty());
        assert!(run.last().is_none());

        run.append(Zone::new(Vec2::new(50.0, 50.0), 40.0, 1));
        run.append(Zone::new(Vec2::new(55.0, 48.0), 26.0, 2));
        assert_eq!(run.len(), 2);
        assert_eq!(run.last().unwrap().phase, 2);

        run.clear();
        assert!(run.is_empty());
        assert!(run.last().is_none());
    }
}
