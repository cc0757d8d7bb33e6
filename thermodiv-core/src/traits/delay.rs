//! Blocking Delay Abstraction

/// Blocking millisecond delay
///
/// Used for the ADC settle time and the spacing between averaged samples.
/// Implementations must actually block: the delays exist to let the
/// multiplexer and sample-and-hold capacitor settle.
pub trait Delay {
    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
