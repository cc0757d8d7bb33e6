//! Error Types for Divider and Curve Conversions
//!
//! ## Design
//!
//! Errors are returned from every conversion that can hit a mathematical
//! domain boundary, so they are kept small and `Copy`:
//!
//! 1. **No Heap Allocation**: reasons are `&'static str`, values are inline `f32`.
//! 2. **Copy Semantics**: cheap to return from hot sampling paths.
//! 3. **Local Failures**: every error describes a single read or compute call.
//!    There is no retry policy and no sticky failure state; the caller decides
//!    whether to sample again.
//!
//! ## What Is *Not* an Error
//!
//! - A divider configured with a balance resistor of `0.0` is the "disabled
//!   divider" sentinel. Resistance conversions return `Ok(0.0)`.
//! - Codes above `max_code` and voltages above the reference are clamped
//!   silently before conversion.
//!
//! ## Handling Strategy
//!
//! ```rust
//! use thermodiv_core::{DividerConfig, SensorError};
//!
//! let config = DividerConfig::default();
//! match config.r2_from_code(0) {
//!     Ok(ohms) => { let _ = ohms; }
//!     Err(SensorError::DisconnectedOrInvalidReading { .. }) => {
//!         // Open circuit: the divider midpoint reads ground
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for sensor conversions
pub type SensorResult<T> = Result<T, SensorError>;

/// Conversion and sampling errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorError {
    /// A zero code/voltage, a zero divider ratio, or a non-positive resistance
    /// reached a division or logarithm. Usually an open or shorted sensor.
    #[error("Sensor disconnected or invalid reading: {value}")]
    DisconnectedOrInvalidReading {
        /// The offending input (code, voltage, ratio or resistance)
        value: f32,
    },

    /// The analog input reported a hardware failure
    #[error("ADC read failed")]
    AdcReadFailed,

    /// Divider configuration rejected by validation
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What the validation rejected
        reason: &'static str,
    },

    /// Operation requires a different calibration curve variant
    #[error("Calibration curve mismatch: expected {expected} curve")]
    CurveMismatch {
        /// Kind of curve the conversion needs
        expected: &'static str,
    },
}

impl SensorError {
    pub(crate) fn invalid_reading(value: f32) -> Self {
        log_warn!("invalid divider reading: {}", value);
        Self::DisconnectedOrInvalidReading { value }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::DisconnectedOrInvalidReading { value } =>
                defmt::write!(fmt, "Disconnected or invalid reading: {}", value),
            Self::AdcReadFailed =>
                defmt::write!(fmt, "ADC read failed"),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
            Self::CurveMismatch { expected } =>
                defmt::write!(fmt, "Curve mismatch, expected {}", expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_small() {
        assert!(core::mem::size_of::<SensorError>() <= 24);
    }

    #[test]
    fn invalid_reading_keeps_value() {
        let err = SensorError::invalid_reading(0.0);
        assert_eq!(err, SensorError::DisconnectedOrInvalidReading { value: 0.0 });
    }
}
