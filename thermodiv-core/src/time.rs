//! Time management for sampling delays
//!
//! Provides the delay implementations used by the divider engine:
//! - `StdDelay` (std only) sleeps the current thread
//! - `MockClock` advances a virtual clock so tests can observe how long a
//!   measurement would have blocked

use crate::traits::Delay;

/// Timestamp in milliseconds since an arbitrary start point
pub type Timestamp = u64;

/// Readable clock, used to measure how long sampling blocked
pub trait TimeSource {
    /// Current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Thread-sleeping delay (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl Delay for StdDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

/// Virtual clock for testing
///
/// Every `delay_ms` call advances the clock instead of blocking, and the
/// number of calls is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    timestamp: Timestamp,
    delay_calls: u32,
}

impl MockClock {
    /// Clock starting at `start`
    pub fn new(start: Timestamp) -> Self {
        Self { timestamp: start, delay_calls: 0 }
    }

    /// Move the clock forward without counting a delay call
    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }

    /// Number of `delay_ms` calls observed
    pub fn delay_calls(&self) -> u32 {
        self.delay_calls
    }

    /// Milliseconds elapsed since `start`
    pub fn elapsed_since(&self, start: Timestamp) -> u64 {
        self.timestamp.saturating_sub(start)
    }
}

impl TimeSource for MockClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

impl Delay for MockClock {
    fn delay_ms(&mut self, ms: u32) {
        self.delay_calls += 1;
        self.advance(u64::from(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_clock_advances_on_delay() {
        let mut clock = MockClock::new(1000);
        clock.delay_ms(10);
        clock.delay_ms(5);

        assert_eq!(clock.now(), 1015);
        assert_eq!(clock.elapsed_since(1000), 15);
        assert_eq!(clock.delay_calls(), 2);

        clock.advance(5);
        assert_eq!(clock.now(), 1020);
        assert_eq!(clock.delay_calls(), 2);
    }

    #[test]
    fn delay_through_mut_reference() {
        fn wait<D: Delay>(mut delay: D) {
            delay.delay_ms(3);
        }

        let mut clock = MockClock::new(0);
        wait(&mut clock);
        assert_eq!(clock.now(), 3);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_delay_blocks() {
        let start = std::time::Instant::now();
        StdDelay.delay_ms(2);
        assert!(start.elapsed() >= std::time::Duration::from_millis(2));
    }
}
