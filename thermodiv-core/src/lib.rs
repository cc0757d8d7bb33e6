//! Divider and temperature conversion core for thermodiv
//!
//! Converts raw ADC samples from a two-resistor voltage divider into a
//! voltage, the resistance of either divider leg, and a temperature.
//! Designed for microcontroller firmware.
//!
//! Key constraints:
//! - `no_std` without the `std` feature
//! - No heap allocation
//! - Hardware access only through the [`traits`] boundary, so every path
//!   runs on the host against [`mock`] inputs and [`time::MockClock`]
//!
//! ```no_run
//! use thermodiv_core::{DividerConfig, BalancePosition};
//!
//! let config = DividerConfig::avr_5v().with_balance(10_000.0, BalancePosition::Upper);
//!
//! // Averaged code of an NTC sitting under a 10 kΩ balance resistor
//! match config.r2_from_code(512) {
//!     Ok(ohms) => {}, // ~10 kΩ
//!     Err(e) => {},   // open or shorted sensor
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod constants;
pub mod curve;
pub mod divider;
pub mod errors;
pub mod mock;
pub mod registry;
pub mod sensors;
pub mod temperature;
pub mod time;
pub mod traits;

// Public API
pub use curve::{BetaModel, CalibrationCurve, DiodeModel, SteinhartHart};
pub use divider::{BalancePosition, DividerConfig, Resistor, VoltageDivider};
pub use errors::{SensorError, SensorResult};
pub use registry::InstanceCounter;
pub use sensors::{TemperatureSensor, Thermistor, ThermistorKind, Tmp36};
pub use temperature::{Temperature, TemperatureUnit};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
