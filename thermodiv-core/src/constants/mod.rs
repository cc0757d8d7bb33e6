//! Constants for thermodiv Core
//!
//! Centralized defaults for the divider engine and the calibration curves.
//! Every value carries its unit in the name and a note on where it comes from.
//!
//! ## Organization
//!
//! - **ADC**: divider hardware defaults (reference voltage, resolution, timing)
//! - **Curves**: Beta and Steinhart-Hart coefficient sets for common parts
//! - **Physics**: temperature scale offsets

/// ADC and divider hardware defaults.
pub mod adc;

/// Thermistor and diode calibration coefficients.
pub mod curves;

/// Temperature scale constants.
pub mod physics;

pub use adc::{
    DEFAULT_ADC_MAX_CODE, DEFAULT_BALANCE_RESISTOR_OHMS, DEFAULT_REFERENCE_VOLTAGE_V,
    DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_DELAY_MS, DEFAULT_SETTLE_DELAY_MS,
};

pub use physics::KELVIN_OFFSET;
