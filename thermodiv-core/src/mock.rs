//! Analog input stubs for hardware-free testing
//!
//! Pair these with [`crate::time::MockClock`] to run the full sampling path
//! deterministically on the host.

use heapless::Vec;

use crate::traits::AnalogInput;

/// Replays a fixed script of raw codes, cycling when it runs out
#[derive(Debug, Clone)]
pub struct ScriptedAdc<const N: usize> {
    script: Vec<u16, N>,
    cursor: usize,
    reads: u32,
    configured: bool,
}

impl<const N: usize> ScriptedAdc<N> {
    /// Script from a slice; codes beyond capacity `N` are dropped
    pub fn from_slice(codes: &[u16]) -> Self {
        let mut script = Vec::new();
        for &code in codes.iter().take(N) {
            // take(N) keeps this within capacity
            let _ = script.push(code);
        }
        Self {
            script,
            cursor: 0,
            reads: 0,
            configured: false,
        }
    }

    /// Always returns `code`
    pub fn constant(code: u16) -> Self {
        Self::from_slice(&[code])
    }

    /// Conversions performed so far
    pub fn reads(&self) -> u32 {
        self.reads
    }

    /// Whether `configure()` has been called
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Replace the script and restart from its first code
    pub fn load(&mut self, codes: &[u16]) {
        let reads = self.reads;
        let configured = self.configured;
        *self = Self::from_slice(codes);
        self.reads = reads;
        self.configured = configured;
    }
}

impl<const N: usize> AnalogInput for ScriptedAdc<N> {
    type Error = ();

    fn configure(&mut self) -> Result<(), Self::Error> {
        self.configured = true;
        Ok(())
    }

    fn read_raw(&mut self) -> nb::Result<u16, Self::Error> {
        if self.script.is_empty() {
            return Err(nb::Error::Other(()));
        }
        let code = self.script[self.cursor % self.script.len()];
        self.cursor = (self.cursor + 1) % self.script.len();
        self.reads += 1;
        Ok(code)
    }
}

/// Reports `WouldBlock` a few times before every conversion completes
#[derive(Debug, Clone)]
pub struct SlowAdc {
    code: u16,
    polls_per_read: u8,
    pending: u8,
    polls: u32,
}

impl SlowAdc {
    /// ADC returning `code` after `polls_per_read` pending polls
    pub fn new(code: u16, polls_per_read: u8) -> Self {
        Self {
            code,
            polls_per_read,
            pending: polls_per_read,
            polls: 0,
        }
    }

    /// Total `read_raw` calls including `WouldBlock` polls
    pub fn polls(&self) -> u32 {
        self.polls
    }
}

impl AnalogInput for SlowAdc {
    type Error = ();

    fn read_raw(&mut self) -> nb::Result<u16, Self::Error> {
        self.polls += 1;
        if self.pending > 0 {
            self.pending -= 1;
            return Err(nb::Error::WouldBlock);
        }
        self.pending = self.polls_per_read;
        Ok(self.code)
    }
}

/// Every conversion fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingAdc;

impl AnalogInput for FailingAdc {
    type Error = ();

    fn read_raw(&mut self) -> nb::Result<u16, Self::Error> {
        Err(nb::Error::Other(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_cycles() {
        let mut adc = ScriptedAdc::<3>::from_slice(&[1, 2, 3]);
        let codes: [u16; 5] = core::array::from_fn(|_| adc.read_raw().unwrap());
        assert_eq!(codes, [1, 2, 3, 1, 2]);
        assert_eq!(adc.reads(), 5);
    }

    #[test]
    fn empty_script_fails() {
        let mut adc = ScriptedAdc::<2>::from_slice(&[]);
        assert!(adc.read_raw().is_err());
    }

    #[test]
    fn slow_adc_blocks_then_reads() {
        let mut adc = SlowAdc::new(77, 2);
        assert_eq!(nb::block!(adc.read_raw()), Ok(77));
        assert_eq!(adc.polls(), 3);
    }
}
