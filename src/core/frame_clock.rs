//! Fixed-rate tick accumulator for the main loop.

use super::constants::{MAX_FRAME_DT_MS, MAX_TICK_RATE_HZ, MIN_TICK_RATE_HZ};
use std::time::Duration;

/// Converts wall-clock time into a whole number of fixed simulation ticks.
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_ms: u64,
    accumulated_ms: u64,
    /// Total ticks handed out since creation.
    pub total_ticks: u64,
}

impl FrameClock {
    /// Create a clock running at `hz` ticks per second (clamped to 1..=120).
    pub fn new(hz: u32) -> Self {
        let hz = hz.clamp(MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ);
        Self {
            tick_ms: (1000 / hz as u64).max(1),
            accumulated_ms: 0,
            total_ticks: 0,
        }
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    /// Feed elapsed time and return how many ticks to simulate.
    ///
    /// `dt_ms` is clamped to `MAX_FRAME_DT_MS` so a stall (suspended
    /// terminal, slow draw) doesn't cause a burst of catch-up ticks.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        self.accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);

        let ticks = self.accumulated_ms / self.tick_ms;
        self.accumulated_ms -= ticks * self.tick_ms;
        self.total_ticks += ticks;
        ticks as u32
    }

    /// Time left before the next tick is due, used as the input poll timeout.
    pub fn time_until_next_tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms - self.accumulated_ms)
    }

    /// Drop any partial tick (used when switching screens).
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_interval() {
        let clock = FrameClock::new(30);
        assert_eq!(clock.tick_ms(), 33);
    }

    #[test]
    fn test_rate_is_clamped() {
        assert_eq!(FrameClock::new(0).tick_ms(), 1000);
        assert_eq!(FrameClock::new(10_000).tick_ms(), 8); // 120 Hz
    }

    #[test]
    fn test_advance_counts_whole_ticks() {
        let mut clock = FrameClock::new(10); // 100ms ticks
        assert_eq!(clock.advance(50), 0);
        assert_eq!(clock.advance(60), 1); // 110 accumulated
        assert_eq!(clock.advance(90), 1); // 10 + 90
        assert_eq!(clock.advance(200), 2);
        assert_eq!(clock.total_ticks, 4);
    }

    #[test]
    fn test_advance_caps_long_stalls() {
        let mut clock = FrameClock::new(10);
        // 10 seconds of stall only yields MAX_FRAME_DT_MS worth of ticks
        assert_eq!(clock.advance(10_000), (MAX_FRAME_DT_MS / 100) as u32);
    }

    #[test]
    fn test_time_until_next_tick() {
        let mut clock = FrameClock::new(10);
        assert_eq!(clock.time_until_next_tick(), Duration::from_millis(100));
        clock.advance(30);
        assert_eq!(clock.time_until_next_tick(), Duration::from_millis(70));
        clock.reset();
        assert_eq!(clock.time_until_next_tick(), Duration::from_millis(100));
    }
}
