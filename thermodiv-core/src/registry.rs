//! Injectable instance accounting
//!
//! A divider attached to an [`InstanceCounter`] increments it on attach and
//! decrements it when dropped. Purely diagnostic: nothing in the conversion
//! path reads the count.
//!
//! ```rust
//! use thermodiv_core::registry::InstanceCounter;
//!
//! static DIVIDERS: InstanceCounter = InstanceCounter::new();
//!
//! let guard = DIVIDERS.register();
//! assert_eq!(DIVIDERS.count(), 1);
//! drop(guard);
//! assert_eq!(DIVIDERS.count(), 0);
//! ```

use core::sync::atomic::{AtomicUsize, Ordering};

/// Process-wide count of live instances
#[derive(Debug, Default)]
pub struct InstanceCounter {
    live: AtomicUsize,
}

impl InstanceCounter {
    /// Counter with no live instances, usable in a `static`
    pub const fn new() -> Self {
        Self { live: AtomicUsize::new(0) }
    }

    /// Number of registered instances still alive
    pub fn count(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    /// Register one instance; the returned guard unregisters it on drop
    pub fn register(&'static self) -> CounterGuard {
        self.live.fetch_add(1, Ordering::Relaxed);
        CounterGuard { counter: self }
    }
}

/// Registration held by a live instance
#[derive(Debug)]
pub struct CounterGuard {
    counter: &'static InstanceCounter,
}

impl CounterGuard {
    /// Counter this guard is registered with
    pub fn counter(&self) -> &'static InstanceCounter {
        self.counter
    }
}

impl Drop for CounterGuard {
    fn drop(&mut self) {
        // Only guards decrement, so the count never goes below zero
        self.counter.live.fetch_sub(1, Ordering::Relaxed);
    }
}
