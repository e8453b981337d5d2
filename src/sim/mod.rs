//! Deterministic zone-shrink simulation
//!
//! All simulation logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - Host-driven time (no ambient timers)
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod machine;
pub mod schedule;
pub mod successor;
pub mod zone;

pub use autoplay::Autoplay;
pub use machine::{SimPhase, ZoneSimulator};
pub use schedule::PhaseSchedule;
pub use successor::generate_successor;
pub use zone::{Zone, ZoneRun};
