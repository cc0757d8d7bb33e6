//! Hardware Boundary Traits
//!
//! The conversion core never talks to a HAL directly. Two small traits describe
//! everything it needs from the platform:
//!
//! - [`adc`] - one blocking ADC conversion on a logical channel
//! - [`delay`] - a blocking millisecond delay
//!
//! Both are generic parameters of `VoltageDivider`, so dispatch is static and
//! tests can inject stubs (see `crate::mock` and `crate::time::MockClock`).
//!
//! ## Usage Example
//!
//! ```rust
//! use thermodiv_core::traits::{AnalogInput, Delay};
//!
//! struct FixedPin(u16);
//!
//! impl AnalogInput for FixedPin {
//!     type Error = ();
//!
//!     fn read_raw(&mut self) -> nb::Result<u16, Self::Error> {
//!         Ok(self.0)
//!     }
//! }
//!
//! struct NoDelay;
//!
//! impl Delay for NoDelay {
//!     fn delay_ms(&mut self, _ms: u32) {}
//! }
//! ```

pub mod adc;
pub mod delay;

pub use adc::AnalogInput;
pub use delay::Delay;
