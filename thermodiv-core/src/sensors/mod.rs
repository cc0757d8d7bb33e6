//! Temperature Sensors
//!
//! Each sensor is a [`VoltageDivider`](crate::divider::VoltageDivider) value
//! composed with a calibration curve:
//!
//! | Sensor       | Divider use                    | Curve                     |
//! |--------------|--------------------------------|---------------------------|
//! | `Thermistor` | unknown leg resistance         | Beta or Steinhart-Hart    |
//! | `Tmp36`      | midpoint voltage only          | linear diode              |
//!
//! ## Usage Example
//!
//! ```rust
//! use thermodiv_core::{
//!     DividerConfig, TemperatureUnit, VoltageDivider,
//!     mock::ScriptedAdc,
//!     sensors::{TemperatureSensor, Thermistor},
//!     time::MockClock,
//! };
//!
//! let divider = VoltageDivider::new(
//!     ScriptedAdc::<1>::constant(511),
//!     MockClock::new(0),
//!     DividerConfig::default(),
//! )?;
//! let mut sensor = Thermistor::mf52d(divider)?;
//!
//! // Midscale on a 10 kΩ divider: the NTC sits at its nominal 25 °C
//! let celsius = sensor.read_temperature(TemperatureUnit::Celsius)?;
//! assert!((celsius - 25.0).abs() < 0.1);
//! # Ok::<(), thermodiv_core::SensorError>(())
//! ```

mod thermistor;
mod tmp36;

pub use thermistor::{Thermistor, ThermistorKind};
pub use tmp36::Tmp36;

use crate::{
    errors::SensorResult,
    temperature::{Temperature, TemperatureUnit},
};

/// A sensor that produces a temperature from one blocking measurement
pub trait TemperatureSensor {
    /// Sample the hardware and solve the active curve
    fn read(&mut self) -> SensorResult<Temperature>;

    /// Sample and convert to `unit`
    fn read_temperature(&mut self, unit: TemperatureUnit) -> SensorResult<f32> {
        self.read().map(|t| t.in_unit(unit))
    }
}
