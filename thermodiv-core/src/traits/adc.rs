//! Analog Input Abstraction
//!
//! Mirrors the shape of the classic `embedded-hal` one-shot ADC trait: a
//! conversion may report `WouldBlock` while in progress, and the divider
//! engine blocks on it with `nb::block!`.

/// One logical ADC channel wired to a divider midpoint
///
/// ## Implementation Requirements
///
/// - `read_raw()` returns a code in `[0, max_code]` for the configured
///   resolution. Larger codes are clamped by the caller, not rejected.
/// - `configure()` is called exactly once when the divider is constructed.
///
/// ## Example Implementation
///
/// ```ignore
/// struct PicoAdcPin {
///     adc: Adc,
///     pin: AdcPin<Gpio26>,
/// }
///
/// impl AnalogInput for PicoAdcPin {
///     type Error = AdcError;
///
///     fn read_raw(&mut self) -> nb::Result<u16, Self::Error> {
///         self.adc.read(&mut self.pin)
///     }
/// }
/// ```
pub trait AnalogInput {
    /// Hardware error reported by the conversion
    type Error;

    /// Put the pin into analog input mode
    ///
    /// Most platforms need nothing here.
    fn configure(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Start or poll a single conversion
    fn read_raw(&mut self) -> nb::Result<u16, Self::Error>;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    type Error = T::Error;

    fn configure(&mut self) -> Result<(), Self::Error> {
        (**self).configure()
    }

    fn read_raw(&mut self) -> nb::Result<u16, Self::Error> {
        (**self).read_raw()
    }
}
