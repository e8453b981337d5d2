//! Autoplay tick accumulator
//!
//! Converts host-supplied elapsed time into discrete advancement ticks at a
//! fixed interval. The scheduler owns no timer of its own: the host feeds it
//! wall-clock deltas (or synthetic ones in tests) and the state machine fires
//! one `advance` per elapsed interval. `stop` drops the accumulator, so once
//! it returns no further ticks can originate from this instance.

use crate::consts::MAX_CATCHUP_TICKS;

/// Fixed-interval tick source for automatic phase advancement
#[derive(Debug, Clone)]
pub struct Autoplay {
    interval_secs: f32,
    accumulator: f32,
    running: bool,
}

impl Autoplay {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval_secs,
            accumulator: 0.0,
            running: false,
        }
    }

    /// Begin ticking; no-op if already running
    pub fn start(&mut self) {
        if !self.running {
            self.accumulator = 0.0;
            self.running = true;
        }
    }

    /// Cancel any pending tick; idempotent
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Accumulate `dt_secs` and drain the number of whole intervals elapsed
    ///
    /// Returns 0 when stopped. Capped at `MAX_CATCHUP_TICKS` so a stalled
    /// host cannot burst the whole schedule in one update.
    pub fn drain_ticks(&mut self, dt_secs: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator += dt_secs;

        let mut ticks = 0;
        while self.accumulator >= self.interval_secs && ticks < MAX_CATCHUP_TICKS {
            self.accumulator -= self.interval_secs;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ticks_while_stopped() {
        let mut autoplay = Autoplay::new(1.0);
        assert_eq!(autoplay.drain_ticks(5.0), 0);
    }

    #[test]
    fn test_fractional_intervals_accumulate() {
        let mut autoplay = Autoplay::new(1.0);
        autoplay.start();
        assert_eq!(autoplay.drain_ticks(0.4), 0);
        assert_eq!(autoplay.drain_ticks(0.4), 0);
        assert_eq!(autoplay.drain_ticks(0.4), 1);
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let mut autoplay = Autoplay::new(1.0);
        autoplay.start();
        assert_eq!(autoplay.drain_ticks(0.99), 0);
        autoplay.stop();
        autoplay.start();
        // Accumulator was dropped; a fresh interval must elapse
        assert_eq!(autoplay.drain_ticks(0.5), 0);
    }

    #[test]
    fn test_catchup_is_capped() {
        let mut autoplay = Autoplay::new(1.0);
        autoplay.start();
        assert_eq!(autoplay.drain_ticks(100.0), MAX_CATCHUP_TICKS);
    }

    #[test]
    fn test_start_while_running_keeps_accumulator() {
        let mut autoplay = Autoplay::new(1.0);
        autoplay.start();
        assert_eq!(autoplay.drain_ticks(0.7), 0);
        autoplay.start();
        assert_eq!(autoplay.drain_ticks(0.3), 1);
    }
}
